use chrono::DateTime;
use chrono::Utc;

use crate::jwt::JwtError;
use crate::jwt::Secret;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenVerifier;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password hashing, token issuance and
/// token verification around a single signing secret.
///
/// Built once at startup and shared behind an `Arc`; it holds no mutable
/// state.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_verifier: TokenVerifier,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed session token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `secret` - Validated signing secret, shared by issuer and verifier
    pub fn new(secret: &Secret) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(secret),
            token_verifier: TokenVerifier::new(secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password and issue a token for `username`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `username` - Subject of the issued token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match (or the stored hash is unreadable)
    /// * `JwtError` - Token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        username: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_issuer.issue(username)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Spend one password verification for a username with no stored hash.
    pub fn verify_decoy(&self, password: &str) {
        self.password_hasher.verify_decoy(password);
    }

    /// Issue a token without password verification.
    pub fn generate_token(&self, username: &str) -> Result<String, JwtError> {
        self.token_issuer.issue(username)
    }

    /// Validate a token and return its username.
    pub fn validate_token(&self, token: &str) -> Result<String, JwtError> {
        self.token_verifier.verify(token)
    }

    /// Validate a token against an explicit point in time.
    pub fn validate_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, JwtError> {
        self.token_verifier.verify_at(token, now)
    }
}
