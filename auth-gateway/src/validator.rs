//! Bearer token validation

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, Result};

/// Decides whether a bearer token grants access.
///
/// `Ok(false)` means the token was checked and rejected; `Err` means it could
/// not be checked at all.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenValidator: Send + Sync {
    async fn is_jwt_valid(&self, token: &str) -> Result<bool>;
}

/// Claims carried by service tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceClaims {
    /// Subject (calling service or user)
    pub sub: String,
    /// Issued at, seconds since epoch
    pub iat: i64,
    /// Expiration, seconds since epoch
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

impl ServiceClaims {
    pub fn new(subject: impl Into<String>, ttl_seconds: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: subject.into(),
            iat: now,
            exp: now.saturating_add(ttl_seconds),
            iss: None,
        }
    }

    #[must_use]
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.iss = Some(issuer.into());
        self
    }
}

/// HS256 validator sharing a secret with the token issuer
pub struct HmacJwtValidator {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl HmacJwtValidator {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Only accept tokens issued by `issuer`
    #[must_use]
    pub fn with_issuer(mut self, issuer: &str) -> Self {
        self.validation.set_issuer(&[issuer]);
        self
    }

    /// Sign claims with the shared secret.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Signing`] if the claims cannot be encoded.
    pub fn sign(&self, claims: &ServiceClaims) -> Result<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }
}

#[async_trait]
impl TokenValidator for HmacJwtValidator {
    async fn is_jwt_valid(&self, token: &str) -> Result<bool> {
        match decode::<ServiceClaims>(token, &self.decoding_key, &self.validation) {
            Ok(_) => Ok(true),
            Err(e) => match e.kind() {
                ErrorKind::InvalidKeyFormat
                | ErrorKind::InvalidEcdsaKey
                | ErrorKind::InvalidRsaKey(_)
                | ErrorKind::Crypto(_) => Err(AuthError::Validation(e.to_string())),
                _ => {
                    tracing::debug!(error = %e, "JWT rejected");
                    Ok(false)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"unit-test-secret";

    #[tokio::test]
    async fn test_signed_token_is_valid() {
        let validator = HmacJwtValidator::new(SECRET);
        let token = validator.sign(&ServiceClaims::new("core-data", 60)).unwrap();

        assert!(validator.is_jwt_valid(&token).await.unwrap());
    }

    #[tokio::test]
    async fn test_wrong_secret_is_rejected() {
        let issuer = HmacJwtValidator::new(b"another-secret");
        let token = issuer.sign(&ServiceClaims::new("core-data", 60)).unwrap();

        let validator = HmacJwtValidator::new(SECRET);
        assert!(!validator.is_jwt_valid(&token).await.unwrap());
    }

    #[tokio::test]
    async fn test_expired_token_is_rejected() {
        let validator = HmacJwtValidator::new(SECRET);
        let token = validator.sign(&ServiceClaims::new("core-data", -120)).unwrap();

        assert!(!validator.is_jwt_valid(&token).await.unwrap());
    }

    #[tokio::test]
    async fn test_issuer_enforced() {
        let validator = HmacJwtValidator::new(SECRET).with_issuer("secret-store");

        let wrong = validator
            .sign(&ServiceClaims::new("core-data", 60).with_issuer("somebody-else"))
            .unwrap();
        assert!(!validator.is_jwt_valid(&wrong).await.unwrap());

        let right = validator
            .sign(&ServiceClaims::new("core-data", 60).with_issuer("secret-store"))
            .unwrap();
        assert!(validator.is_jwt_valid(&right).await.unwrap());
    }

    #[tokio::test]
    async fn test_garbage_is_rejected() {
        let validator = HmacJwtValidator::new(SECRET);
        assert!(!validator.is_jwt_valid("not.a.jwt").await.unwrap());
        assert!(!validator.is_jwt_valid("").await.unwrap());
    }
}
