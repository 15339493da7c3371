use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::parse_post_id;
use crate::domain::post::models::UpdatePostCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::router::AppState;

pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdatePostRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let post_id = parse_post_id(&id)?;
    let Json(body) = body?;

    state
        .post_service
        .update_post(&post_id, body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageData::new("Post updated successfully"),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdatePostRequestBody {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    author: Option<String>,
}

impl UpdatePostRequestBody {
    fn into_command(self) -> UpdatePostCommand {
        UpdatePostCommand {
            title: self.title,
            content: self.content,
            author: self.author.filter(|author| !author.is_empty()),
        }
    }
}
