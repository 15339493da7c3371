use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;

pub mod create_post;
pub mod delete_post;
pub mod get_post;
pub mod list_posts;
pub mod update_post;

pub use create_post::create_post;
pub use delete_post::delete_post;
pub use get_post::get_post;
pub use list_posts::list_posts;
pub use update_post::update_post;

/// Post as rendered in HTTP responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostResponseData {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Post> for PostResponseData {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            created_at: post.created_at,
        }
    }
}

fn parse_post_id(raw: &str) -> Result<PostId, PostError> {
    Ok(PostId::from_string(raw)?)
}
