//! Authentication utilities library
//!
//! Provides the authentication core for the social API:
//! - Password hashing (Argon2id)
//! - Session token issuance and verification (HS256 JWT, 24 hour lifetime)
//! - Authentication coordination around a single signing secret
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{Secret, TokenIssuer, TokenVerifier};
//!
//! let secret = Secret::new("secret_key_at_least_32_bytes_long!").unwrap();
//! let token = TokenIssuer::new(&secret).issue("alice").unwrap();
//! let username = TokenVerifier::new(&secret).verify(&token).unwrap();
//! assert_eq!(username, "alice");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Secret};
//!
//! let secret = Secret::new("secret_key_at_least_32_bytes_long!").unwrap();
//! let auth = Authenticator::new(&secret);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth.authenticate("password123", &hash, "alice").unwrap();
//!
//! // Validate token
//! assert_eq!(auth.validate_token(&result.access_token).unwrap(), "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::Secret;
pub use jwt::TokenIssuer;
pub use jwt::TokenVerifier;
pub use password::PasswordError;
pub use password::PasswordHasher;
