use auth::JwtError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::account::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Identity of the caller, stored in request extensions by [`authenticate`].
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: Username,
}

/// Middleware that validates the bearer token and attaches the caller's identity.
///
/// A missing header or a bad signature/expired token yields 401. A header
/// without the exact `Bearer ` prefix, or a token that cannot be parsed,
/// yields 400.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?;

    let subject = state
        .authenticator
        .validate_token(token)
        .map_err(|e| {
            tracing::warn!(reason = %e, "Token rejected");
            match e {
                JwtError::Malformed(_) => token_parse_error(),
                _ => invalid_token_error(),
            }
        })?;

    let username = Username::new(subject).map_err(|e| {
        tracing::warn!(reason = %e, "Token subject rejected");
        invalid_token_error()
    })?;

    req.extensions_mut().insert(AuthenticatedUser { username });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let not_provided =
        || ApiError::Unauthorized("Authorization token not provided".to_string());

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(not_provided)?;

    let auth_str = auth_header.to_str().map_err(|_| {
        tracing::warn!("Authorization header is not visible ASCII");
        token_parse_error()
    })?;

    if auth_str.is_empty() {
        return Err(not_provided());
    }

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Authorization header lacks the Bearer scheme");
        token_parse_error()
    })
}

fn token_parse_error() -> ApiError {
    ApiError::BadRequest("Error while parsing token".to_string())
}

fn invalid_token_error() -> ApiError {
    ApiError::Unauthorized("Invalid or expired token".to_string())
}
