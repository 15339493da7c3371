use axum::http::StatusCode;

use super::ApiSuccess;
use super::MessageData;

pub async fn health_check() -> ApiSuccess<MessageData> {
    ApiSuccess::new(StatusCode::OK, MessageData::new("OK"))
}
