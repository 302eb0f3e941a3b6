use std::sync::Arc;

use auth::Authenticator;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;

/// Identity attached to requests that passed the bearer check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Middleware that admits only requests carrying a valid access token.
///
/// Every rejection yields the same 401 body; the reason is only logged.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req).map_err(|reason| {
        tracing::debug!(reason, "Rejected request without usable bearer token");
        unauthorized()
    })?;

    let claims = authenticator.validate_access_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Access token validation failed");
        unauthorized()
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        username: claims.username().to_string(),
    });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, &'static str> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or("missing Authorization header")?
        .to_str()
        .map_err(|_| "non-ASCII Authorization header")?;

    // Scheme names are case-insensitive.
    let (scheme, token) = value
        .split_once(' ')
        .ok_or("Authorization header has no scheme")?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err("Authorization scheme is not Bearer");
    }
    let token = token.trim();

    if token.is_empty() {
        return Err("empty bearer token");
    }
    Ok(token)
}

fn unauthorized() -> Response {
    ApiError::Unauthorized("Unauthorized".to_string()).into_response()
}
