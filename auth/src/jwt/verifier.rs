use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;
use super::secret::Secret;

/// Validates session tokens and extracts the username they carry.
///
/// Checks the HS256 signature and the expiry, nothing else: no issuer or
/// audience, no revocation list.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &Secret) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against an injectable clock in `verify_at`.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verify a token against the current time.
    ///
    /// # Returns
    /// The username from the `sub` claim
    ///
    /// # Errors
    /// * `Malformed` - Not a parsable HS256 token with the expected claims
    /// * `InvalidSignature` - MAC does not match
    /// * `Expired` - Current time is past `exp`
    pub fn verify(&self, token: &str) -> Result<String, JwtError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token against an explicit point in time.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, JwtError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                    ErrorKind::ExpiredSignature => JwtError::Expired,
                    _ => JwtError::Malformed(e.to_string()),
                }
            })?;

        let claims = token_data.claims;
        if claims.is_expired(now.timestamp()) {
            return Err(JwtError::Expired);
        }

        Ok(claims.sub)
    }
}
