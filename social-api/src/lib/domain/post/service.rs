use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::UpdatePostCommand;
use crate::domain::post::ports::PostRepository;
use crate::domain::post::ports::PostServicePort;

/// Domain service implementation for post operations.
pub struct PostService<PR>
where
    PR: PostRepository,
{
    repository: Arc<PR>,
}

impl<PR> PostService<PR>
where
    PR: PostRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> PostServicePort for PostService<PR>
where
    PR: PostRepository,
{
    async fn create_post(&self, command: CreatePostCommand) -> Result<Post, PostError> {
        let post = Post {
            id: PostId::new(),
            title: command.title,
            content: command.content,
            author: command.author,
            created_at: Utc::now(),
        };

        let created = self.repository.insert(post).await?;
        tracing::debug!(post_id = %created.id, author = %created.author, "Post created");

        Ok(created)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, PostError> {
        self.repository.list().await
    }

    async fn get_post(&self, id: &PostId) -> Result<Post, PostError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound(id.to_string()))
    }

    async fn update_post(
        &self,
        id: &PostId,
        command: UpdatePostCommand,
    ) -> Result<Post, PostError> {
        let mut post = self.get_post(id).await?;

        post.title = command.title;
        post.content = command.content;
        if let Some(author) = command.author {
            post.author = author;
        }

        let updated = self.repository.update(post).await?;
        tracing::debug!(post_id = %updated.id, "Post updated");

        Ok(updated)
    }

    async fn delete_post(&self, id: &PostId) -> Result<(), PostError> {
        self.repository.delete(id).await?;
        tracing::debug!(post_id = %id, "Post deleted");

        Ok(())
    }
}
