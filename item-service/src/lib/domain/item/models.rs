use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use super::errors::ItemIdError;
use super::errors::ItemNameError;
use super::errors::PriceError;

/// Stored item record.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: ItemName,
    pub price: Price,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Overlay the fields present in `patch`.
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
    }
}

/// Store-assigned item identifier (always positive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub i64);

impl ItemId {
    /// Parse a path segment into an item ID.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not an integer
    /// * `NotPositive` - Zero or negative
    pub fn parse(s: &str) -> Result<Self, ItemIdError> {
        let id = s
            .trim()
            .parse::<i64>()
            .map_err(|e| ItemIdError::InvalidFormat(e.to_string()))?;

        if id <= 0 {
            return Err(ItemIdError::NotPositive(id));
        }
        Ok(Self(id))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Item name value type: trimmed, non-empty, at most 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    const MAX_LENGTH: usize = 255;

    pub fn new(name: impl AsRef<str>) -> Result<Self, ItemNameError> {
        let trimmed = name.as_ref().trim();
        let length = trimmed.chars().count();

        if length == 0 {
            Err(ItemNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(ItemNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Strictly positive, finite price.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, PriceError> {
        if !value.is_finite() {
            Err(PriceError::NotFinite)
        } else if value <= 0.0 {
            Err(PriceError::NotPositive(value))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Validated fields of an item that does not exist yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: ItemName,
    pub price: Price,
}

/// Validated partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<ItemName>,
    pub price: Option<Price>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_parse() {
        assert_eq!(ItemId::parse("42"), Ok(ItemId(42)));
        assert_eq!(ItemId::parse("0"), Err(ItemIdError::NotPositive(0)));
        assert_eq!(ItemId::parse("-3"), Err(ItemIdError::NotPositive(-3)));
        assert!(matches!(
            ItemId::parse("abc"),
            Err(ItemIdError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_item_name_validation() {
        assert_eq!(ItemName::new("  Widget ").unwrap().as_str(), "Widget");
        assert_eq!(ItemName::new(""), Err(ItemNameError::Empty));
        assert_eq!(ItemName::new(" \t"), Err(ItemNameError::Empty));
        assert!(matches!(
            ItemName::new("x".repeat(256)),
            Err(ItemNameError::TooLong { max: 255, .. })
        ));
    }

    #[test]
    fn test_price_validation() {
        assert_eq!(Price::new(9.99).unwrap().value(), 9.99);
        assert_eq!(Price::new(0.0), Err(PriceError::NotPositive(0.0)));
        assert_eq!(Price::new(-1.5), Err(PriceError::NotPositive(-1.5)));
        assert_eq!(Price::new(f64::NAN), Err(PriceError::NotFinite));
        assert_eq!(Price::new(f64::INFINITY), Err(PriceError::NotFinite));
    }

    #[test]
    fn test_apply_patch_keeps_absent_fields() {
        let now = Utc::now();
        let mut item = Item {
            id: ItemId(1),
            name: ItemName::new("Widget").unwrap(),
            price: Price::new(10.0).unwrap(),
            created_at: now,
            updated_at: now,
        };

        item.apply(ItemPatch {
            name: None,
            price: Some(Price::new(12.5).unwrap()),
        });

        assert_eq!(item.name.as_str(), "Widget");
        assert_eq!(item.price.value(), 12.5);
    }
}
