//! Token verification - Accepts bearer tokens issued by the identity service.
//!
//! Identity issuance lives elsewhere; this service only checks the
//! signature and expiry of HS256 tokens and reads the caller's claims.

use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppResult;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token verification trait for dependency injection.
pub trait TokenVerifier: Send + Sync {
    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of TokenVerifier using a shared secret.
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    /// Create new verifier from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret_bytes()),
            validation: Validation::default(),
        }
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};

    use crate::errors::AppError;

    const SECRET: &str = "test-secret-key-for-testing-only-32chars";

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims(expires_in: Duration) -> Claims {
        let now = Utc::now();
        Claims {
            sub: Uuid::new_v4(),
            email: "camper@example.com".to_string(),
            role: "user".to_string(),
            exp: (now + expires_in).timestamp(),
            iat: now.timestamp(),
        }
    }

    fn verifier() -> JwtVerifier {
        JwtVerifier::new(&Config::with_secret("postgres://localhost/test", SECRET))
    }

    #[test]
    fn valid_token_yields_claims() {
        let issued = claims(Duration::hours(1));
        let token = sign(&issued, SECRET);

        let verified = verifier().verify_token(&token).unwrap();

        assert_eq!(verified.sub, issued.sub);
        assert_eq!(verified.email, "camper@example.com");
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = sign(&claims(Duration::hours(1)), "another-secret-key-that-is-32-chars!!");

        let result = verifier().verify_token(&token);
        assert!(matches!(result, Err(AppError::Jwt(_))));
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = sign(&claims(Duration::hours(-2)), SECRET);

        assert!(verifier().verify_token(&token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(verifier().verify_token("not-a-jwt").is_err());
    }
}
