use async_trait::async_trait;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::UpdatePostCommand;

/// Port for post domain service operations.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    /// Create and store a new post.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_post(&self, command: CreatePostCommand) -> Result<Post, PostError>;

    /// List all posts, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_posts(&self) -> Result<Vec<Post>, PostError>;

    /// Retrieve a post by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_post(&self, id: &PostId) -> Result<Post, PostError>;

    /// Overwrite a post's title, content and (optionally) author.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_post(&self, id: &PostId, command: UpdatePostCommand)
        -> Result<Post, PostError>;

    /// Delete a post.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_post(&self, id: &PostId) -> Result<(), PostError>;
}

/// Persistence operations for posts.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    async fn insert(&self, post: Post) -> Result<Post, PostError>;

    /// # Returns
    /// Optional post (None if not found)
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError>;

    /// # Returns
    /// All posts ordered by id descending
    async fn list(&self) -> Result<Vec<Post>, PostError>;

    /// # Errors
    /// * `NotFound` - No post with this id
    async fn update(&self, post: Post) -> Result<Post, PostError>;

    /// # Errors
    /// * `NotFound` - No post with this id
    async fn delete(&self, id: &PostId) -> Result<(), PostError>;
}
