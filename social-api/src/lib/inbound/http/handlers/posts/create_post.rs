use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::PostResponseData;
use crate::domain::post::models::CreatePostCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    body: Result<Json<CreatePostRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<PostResponseData>, ApiError> {
    let Json(body) = body?;

    state
        .post_service
        .create_post(body.into_command(&user))
        .await
        .map_err(ApiError::from)
        .map(|post| ApiSuccess::new(StatusCode::CREATED, PostResponseData::from(&post)))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePostRequestBody {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    author: Option<String>,
}

impl CreatePostRequestBody {
    fn into_command(self, user: &AuthenticatedUser) -> CreatePostCommand {
        let author = self
            .author
            .filter(|author| !author.is_empty())
            .unwrap_or_else(|| user.username.to_string());

        CreatePostCommand {
            title: self.title,
            content: self.content,
            author,
        }
    }
}
