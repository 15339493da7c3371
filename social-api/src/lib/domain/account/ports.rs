use async_trait::async_trait;

use crate::domain::account::errors::AuthError;
use crate::domain::account::models::Credential;
use crate::domain::account::models::LoginCommand;
use crate::domain::account::models::RegisterCommand;
use crate::domain::account::models::Username;

/// Port for registration and login.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new username and password.
    ///
    /// # Arguments
    /// * `command` - Validated username and plaintext password
    ///
    /// # Returns
    /// The stored credential
    ///
    /// # Errors
    /// * `DuplicateUsername` - A credential with this username already exists
    /// * `Hashing` - Password hashing failed
    /// * `DatabaseError` - Persistence failed
    async fn register(&self, command: RegisterCommand) -> Result<Credential, AuthError>;

    /// Exchange credentials for a session token.
    ///
    /// # Arguments
    /// * `command` - Username and plaintext password
    ///
    /// # Returns
    /// Signed session token valid for 24 hours
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Signing` - Token signing failed
    /// * `DatabaseError` - Persistence failed
    async fn login(&self, command: LoginCommand) -> Result<String, AuthError>;
}

/// Persistence operations for credentials.
///
/// Implementations do not enforce username uniqueness; the auth service
/// checks before inserting.
#[async_trait]
pub trait CredentialRepository: Send + Sync + 'static {
    /// Retrieve credential by username.
    ///
    /// # Returns
    /// Optional credential (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username)
        -> Result<Option<Credential>, AuthError>;

    /// Persist a new credential.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn insert(&self, credential: Credential) -> Result<Credential, AuthError>;
}
