use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostRepository;

pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn post_from_row(row: &PgRow) -> Result<Post, PostError> {
    let database_error = |e: sqlx::Error| PostError::DatabaseError(e.to_string());

    Ok(Post {
        id: PostId(row.try_get("id").map_err(database_error)?),
        title: row.try_get("title").map_err(database_error)?,
        content: row.try_get("content").map_err(database_error)?,
        author: row.try_get("author").map_err(database_error)?,
        created_at: row.try_get("created_at").map_err(database_error)?,
    })
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, post: Post) -> Result<Post, PostError> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, title, content, author, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(post.id.0)
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.author)
        .bind(post.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(post)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, content, author, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        row.as_ref().map(post_from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<Post>, PostError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, content, author, created_at
            FROM posts
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        rows.iter().map(post_from_row).collect()
    }

    async fn update(&self, post: Post) -> Result<Post, PostError> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = $2, content = $3, author = $4
            WHERE id = $1
            "#,
        )
        .bind(post.id.0)
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.author)
        .execute(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PostError::NotFound(post.id.to_string()));
        }

        Ok(post)
    }

    async fn delete(&self, id: &PostId) -> Result<(), PostError> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PostError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
