use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_post_id;
use super::PostResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<PostResponseData>, ApiError> {
    let post_id = parse_post_id(&id)?;

    state
        .post_service
        .get_post(&post_id)
        .await
        .map_err(ApiError::from)
        .map(|post| ApiSuccess::new(StatusCode::OK, PostResponseData::from(&post)))
}
