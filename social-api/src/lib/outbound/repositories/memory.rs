//! In-memory document store.
//!
//! Used when no database URL is configured and by the test suites. Like the
//! PostgreSQL schema, the credential collection has no uniqueness constraint
//! on usernames.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::account::errors::AuthError;
use crate::domain::account::models::Credential;
use crate::domain::account::models::Username;
use crate::domain::account::ports::CredentialRepository;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostRepository;

#[derive(Default)]
pub struct InMemoryCredentialRepository {
    credentials: RwLock<Vec<Credential>>,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.credentials.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.credentials.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Credential>, AuthError> {
        Ok(self
            .credentials
            .read()
            .await
            .iter()
            .find(|credential| &credential.username == username)
            .cloned())
    }

    async fn insert(&self, credential: Credential) -> Result<Credential, AuthError> {
        self.credentials.write().await.push(credential.clone());
        Ok(credential)
    }
}

#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<PostId, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: Post) -> Result<Post, PostError> {
        self.posts.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError> {
        Ok(self.posts.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Post>, PostError> {
        let mut posts: Vec<Post> = self.posts.read().await.values().cloned().collect();
        posts.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(posts)
    }

    async fn update(&self, post: Post) -> Result<Post, PostError> {
        match self.posts.write().await.get_mut(&post.id) {
            Some(stored) => {
                *stored = post.clone();
                Ok(post)
            }
            None => Err(PostError::NotFound(post.id.to_string())),
        }
    }

    async fn delete(&self, id: &PostId) -> Result<(), PostError> {
        self.posts
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(PostError::NotFound(id.to_string()))
    }
}
