use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::JwtError;
use super::secret::Secret;

/// Creates signed, time-bounded session tokens (HS256).
pub struct TokenIssuer {
    encoding_key: EncodingKey,
}

impl TokenIssuer {
    pub fn new(secret: &Secret) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a token for `username`, valid from now for 24 hours.
    ///
    /// # Errors
    /// * `SigningFailed` - Serialization or signing of the claims failed
    pub fn issue(&self, username: &str) -> Result<String, JwtError> {
        self.issue_at(username, Utc::now())
    }

    /// Issue a token with an externally supplied issue time.
    ///
    /// Identical inputs and secret give identical tokens.
    pub fn issue_at(&self, username: &str, issued_at: DateTime<Utc>) -> Result<String, JwtError> {
        let claims = Claims::for_subject(username, issued_at);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::SigningFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(&Secret::new("issuer_test_secret_at_least_32_bytes!").unwrap())
    }

    #[test]
    fn test_issue_produces_three_segments() {
        let token = issuer().issue("alice").expect("Failed to issue token");

        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_issue_at_is_deterministic() {
        let issuer = issuer();
        let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        let first = issuer.issue_at("alice", issued_at).unwrap();
        let second = issuer.issue_at("alice", issued_at).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_different_secrets_sign_differently() {
        let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let other = TokenIssuer::new(&Secret::new("another_secret_at_least_32_bytes_!!").unwrap());

        let first = issuer().issue_at("alice", issued_at).unwrap();
        let second = other.issue_at("alice", issued_at).unwrap();

        assert_ne!(first, second);
    }
}
