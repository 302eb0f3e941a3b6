use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::auth::errors::AuthError;
use crate::domain::item::errors::ItemError;

pub mod items;
pub mod login;
pub mod refresh;
pub mod register;

pub use items::create_item;
pub use items::delete_item;
pub use items::get_item;
pub use items::list_items;
pub use items::update_item;
pub use login::login;
pub use refresh::refresh;
pub use register::register;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiErrorData::new(message))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
        ApiError::BadRequest("Invalid input".to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(msg) => ApiError::BadRequest(msg),
            AuthError::Conflict(_) => ApiError::Conflict("Username already exists".to_string()),
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            AuthError::InvalidToken => ApiError::Unauthorized("Invalid refresh token".to_string()),
            // Details stay in the logs.
            AuthError::Store(_) | AuthError::Internal(_) => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<ItemError> for ApiError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::InvalidId(_) => ApiError::BadRequest("Invalid ID".to_string()),
            ItemError::InvalidName(_) | ItemError::InvalidPrice(_) => {
                ApiError::BadRequest(err.to_string())
            }
            ItemError::NotFound(_) => ApiError::NotFound("Item not found".to_string()),
            ItemError::Store(_) => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

/// Unwrap a JSON body, turning any extractor rejection into a 400.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload.map(|Json(body)| body).map_err(ApiError::from)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub status: bool,
    pub message: String,
}

impl ApiErrorData {
    pub fn new(message: String) -> Self {
        Self {
            status: false,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::errors::PriceError;
    use crate::domain::item::models::ItemId;

    #[test]
    fn test_auth_error_mapping() {
        assert_eq!(
            ApiError::from(AuthError::Validation("Username and password are required".into())),
            ApiError::BadRequest("Username and password are required".into())
        );
        assert!(matches!(
            ApiError::from(AuthError::Conflict("alice".into())),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            ApiError::from(AuthError::InvalidCredentials),
            ApiError::Unauthorized(_)
        ));
        assert!(matches!(
            ApiError::from(AuthError::InvalidToken),
            ApiError::Unauthorized(_)
        ));
    }

    #[test]
    fn test_internal_details_are_not_exposed() {
        let api_error = ApiError::from(AuthError::Store("password=hunter2 host=db".into()));
        assert_eq!(
            api_error,
            ApiError::InternalServerError("Internal server error".into())
        );
    }

    #[test]
    fn test_item_error_mapping() {
        assert!(matches!(
            ApiError::from(ItemError::InvalidPrice(PriceError::NotPositive(0.0))),
            ApiError::BadRequest(_)
        ));
        assert_eq!(
            ApiError::from(ItemError::NotFound(ItemId(1))),
            ApiError::NotFound("Item not found".into())
        );
        assert!(matches!(
            ApiError::from(ItemError::Store("boom".into())),
            ApiError::InternalServerError(_)
        ));
    }

    #[test]
    fn test_error_status_codes() {
        let cases = [
            (ApiError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::Unauthorized("x".into()), StatusCode::UNAUTHORIZED),
            (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ApiError::Conflict("x".into()), StatusCode::CONFLICT),
            (
                ApiError::InternalServerError("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
