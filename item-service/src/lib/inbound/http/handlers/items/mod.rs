use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemDraft;
use crate::domain::item::models::ItemName;
use crate::domain::item::models::ItemPatch;
use crate::domain::item::models::Price;

pub mod create_item;
pub mod delete_item;
pub mod get_item;
pub mod list_items;
pub mod update_item;

pub use create_item::create_item;
pub use delete_item::delete_item;
pub use get_item::get_item;
pub use list_items::list_items;
pub use update_item::update_item;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemData {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Item> for ItemData {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.0,
            name: item.name.as_str().to_string(),
            price: item.price.value(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemResponseData {
    pub status: bool,
    pub message: String,
    pub item: ItemData,
}

impl ItemResponseData {
    pub fn new(message: &str, item: &Item) -> Self {
        Self {
            status: true,
            message: message.to_string(),
            item: item.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemsResponseData {
    pub status: bool,
    pub message: String,
    pub items: Vec<ItemData>,
}

/// A missing name reads as empty and a missing price as zero, so both fail
/// validation rather than deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateItemRequestBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    price: f64,
}

impl CreateItemRequestBody {
    pub fn try_into_draft(self) -> Result<ItemDraft, ItemError> {
        Ok(ItemDraft {
            name: ItemName::new(self.name)?,
            price: Price::new(self.price)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateItemRequestBody {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    price: Option<f64>,
}

impl UpdateItemRequestBody {
    /// Validate only the fields that were sent.
    pub fn try_into_patch(self) -> Result<ItemPatch, ItemError> {
        Ok(ItemPatch {
            name: self.name.map(ItemName::new).transpose()?,
            price: self.price.map(Price::new).transpose()?,
        })
    }
}
