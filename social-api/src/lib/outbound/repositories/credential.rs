use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::account::errors::AuthError;
use crate::domain::account::models::Credential;
use crate::domain::account::models::CredentialId;
use crate::domain::account::models::Username;
use crate::domain::account::ports::CredentialRepository;

pub struct PostgresCredentialRepository {
    pool: PgPool,
}

impl PostgresCredentialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn credential_from_row(row: &PgRow) -> Result<Credential, AuthError> {
    let database_error = |e: sqlx::Error| AuthError::DatabaseError(e.to_string());

    Ok(Credential {
        id: CredentialId(row.try_get("id").map_err(database_error)?),
        username: Username::new(row.try_get("username").map_err(database_error)?)?,
        password_hash: row.try_get("password_hash").map_err(database_error)?,
        created_at: row.try_get("created_at").map_err(database_error)?,
    })
}

#[async_trait]
impl CredentialRepository for PostgresCredentialRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Credential>, AuthError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = $1
            ORDER BY created_at
            LIMIT 1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        row.as_ref().map(credential_from_row).transpose()
    }

    async fn insert(&self, credential: Credential) -> Result<Credential, AuthError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(credential.id.0)
        .bind(credential.username.as_str())
        .bind(&credential.password_hash)
        .bind(credential.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(credential)
    }
}
