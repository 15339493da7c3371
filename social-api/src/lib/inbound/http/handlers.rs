use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::account::errors::AuthError;
use crate::domain::post::errors::PostError;

pub mod health_check;
pub mod login;
pub mod posts;
pub mod register;

pub use health_check::health_check;
pub use login::login;
pub use posts::create_post;
pub use posts::delete_post;
pub use posts::get_post;
pub use posts::list_posts;
pub use posts::update_post;
pub use register::register;

/// Successful response: status plus a flat JSON body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Error response rendered as `{"error": message}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiErrorData { error: message })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidUsername(_) | AuthError::InvalidPassword(_) => {
                ApiError::BadRequest(err.to_string())
            }
            AuthError::DuplicateUsername(_) | AuthError::InvalidCredentials => {
                ApiError::Unauthorized(err.to_string())
            }
            AuthError::Hashing(detail) => {
                tracing::error!(error = %detail, "Password hashing failed");
                ApiError::InternalServerError("Error while hashing password".to_string())
            }
            AuthError::Signing(detail) => {
                tracing::error!(error = %detail, "Token signing failed");
                ApiError::InternalServerError("Error while generating token".to_string())
            }
            AuthError::DatabaseError(detail) => {
                tracing::error!(error = %detail, "Credential store failure");
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<PostError> for ApiError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::InvalidPostId(_) => ApiError::BadRequest(err.to_string()),
            PostError::NotFound(_) => ApiError::NotFound("Post not found".to_string()),
            PostError::DatabaseError(detail) => {
                tracing::error!(error = %detail, "Post store failure");
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub message: String,
}

impl MessageData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
