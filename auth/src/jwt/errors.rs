use thiserror::Error;

/// Error type for token operations.
///
/// `Malformed`, `InvalidSignature` and `Expired` are the verifier's rejection
/// reasons. They are kept apart for logging; callers facing a client should
/// collapse them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Signing secret is invalid: {0}")]
    InvalidSecret(String),

    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,
}
