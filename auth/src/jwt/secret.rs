use std::fmt;

use super::errors::JwtError;

/// Process-wide HMAC signing key.
///
/// Built once at startup and shared read-only by the issuer and verifier.
#[derive(Clone)]
pub struct Secret(Vec<u8>);

impl Secret {
    /// Wrap raw key bytes.
    ///
    /// # Errors
    /// * `InvalidSecret` - The key is empty
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, JwtError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(JwtError::InvalidSecret("secret must not be empty".to_string()));
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}
