use std::fmt;

use super::errors::AuthError;
use crate::domain::user::models::Username;

/// Username and plaintext password as submitted by a client.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Validate both fields and split them into domain values.
    ///
    /// # Errors
    /// * `Validation` - Username or password is empty, or username too long
    pub fn into_parts(self) -> Result<(Username, String), AuthError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(AuthError::Validation(
                "Username and password are required".to_string(),
            ));
        }

        let username =
            Username::new(&self.username).map_err(|e| AuthError::Validation(e.to_string()))?;

        Ok((username, self.password))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
