use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::account::errors::AuthError;
use crate::domain::account::models::Credential;
use crate::domain::account::models::LoginCommand;
use crate::domain::account::models::RegisterCommand;
use crate::domain::account::ports::AuthServicePort;
use crate::domain::account::ports::CredentialRepository;

/// Domain service implementation for registration and login.
pub struct AuthService<CR>
where
    CR: CredentialRepository,
{
    repository: Arc<CR>,
    authenticator: Arc<Authenticator>,
}

impl<CR> AuthService<CR>
where
    CR: CredentialRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential persistence implementation
    /// * `authenticator` - Process-wide hasher and token issuer
    pub fn new(repository: Arc<CR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<CR> AuthServicePort for AuthService<CR>
where
    CR: CredentialRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<Credential, AuthError> {
        // Check-then-insert is not atomic: two concurrent registrations of
        // the same username can both pass this lookup.
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            tracing::info!(username = %command.username, "Registration rejected, username taken");
            return Err(AuthError::DuplicateUsername(command.username.to_string()));
        }

        let password_hash = self
            .authenticator
            .hash_password(command.password.as_str())
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        let credential = self
            .repository
            .insert(Credential::new(command.username, password_hash))
            .await?;

        tracing::info!(
            credential_id = %credential.id,
            username = %credential.username,
            "Credential registered"
        );

        Ok(credential)
    }

    async fn login(&self, command: LoginCommand) -> Result<String, AuthError> {
        let Some(credential) = self.repository.find_by_username(&command.username).await? else {
            // Same Argon2 cost as a wrong password for a known user.
            self.authenticator.verify_decoy(command.password.as_str());
            return Err(AuthError::InvalidCredentials);
        };

        let result = self
            .authenticator
            .authenticate(
                command.password.as_str(),
                &credential.password_hash,
                credential.username.as_str(),
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => AuthError::InvalidCredentials,
                AuthenticationError::JwtError(err) => AuthError::Signing(err.to_string()),
            })?;

        tracing::debug!(username = %credential.username, "Session token issued");

        Ok(result.access_token)
    }
}
