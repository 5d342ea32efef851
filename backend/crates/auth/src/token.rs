//! JWT bearer token issuance and verification.
//!
//! Tokens are stateless: HS256-signed with the process-wide secret from
//! [`AuthConfig`], carrying the user id and a fixed expiry. Verification
//! needs no storage lookup, which trades revocability for simplicity.
//!
//! Every verification failure (malformed token, bad signature, expired)
//! collapses to [`AuthError::InvalidToken`]; callers never learn which.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::value_object::UserId;
use crate::error::AuthError;

/// JWT claims embedded in every bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — user ID (UUID string).
    pub sub: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

/// Issue a signed bearer token for a user.
pub fn issue(user_id: &UserId, config: &AuthConfig) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();
    let claims = TokenClaims {
        sub: user_id.to_string(),
        iat: now,
        exp: now + config.token_ttl_secs(),
    };

    let key = EncodingKey::from_secret(config.token_secret.as_bytes());
    let header = Header::new(Algorithm::HS256);

    jsonwebtoken::encode(&header, &claims, &key)
        .map_err(|e| AuthError::Internal(format!("JWT encode: {e}")))
}

/// Decode and verify a bearer token, returning the embedded user id.
pub fn verify(token: &str, config: &AuthConfig) -> Result<UserId, AuthError> {
    let key = DecodingKey::from_secret(config.token_secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["sub", "exp", "iat"]);

    let claims = jsonwebtoken::decode::<TokenClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)?;

    let uuid = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidToken)?;
    Ok(UserId::from_uuid(uuid))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig::new("test-secret-please-dont-ship")
    }

    #[test]
    fn token_roundtrip() {
        let config = test_config();
        let user_id = UserId::new();

        let token = issue(&user_id, &config).unwrap();
        let verified = verify(&token, &config).unwrap();

        assert_eq!(verified, user_id);
    }

    #[test]
    fn expiry_is_seven_days() {
        let config = test_config();
        let token = issue(&UserId::new(), &config).unwrap();

        // Decode without verification to inspect the claims
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        let claims = jsonwebtoken::decode::<TokenClaims>(
            &token,
            &DecodingKey::from_secret(&[]),
            &validation,
        )
        .unwrap()
        .claims;

        assert_eq!(claims.exp - claims.iat, 7 * 24 * 3600);
    }

    #[test]
    fn expired_token_rejected() {
        let config = test_config();
        let now = Utc::now().timestamp();

        // Token that expired an hour ago
        let claims = TokenClaims {
            sub: UserId::new().to_string(),
            iat: now - 8 * 24 * 3600,
            exp: now - 3600,
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(config.token_secret.as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            verify(&token, &config),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn tampered_signature_rejected() {
        let config = test_config();
        let token = issue(&UserId::new(), &config).unwrap();

        // Flip the last character of the signature
        let mut tampered: String = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });
        assert_ne!(token, tampered);

        assert!(matches!(
            verify(&tampered, &config),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn wrong_secret_rejected() {
        let config = test_config();
        let token = issue(&UserId::new(), &config).unwrap();

        let other = AuthConfig::new("a-different-secret");
        assert!(matches!(
            verify(&token, &other),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn garbage_token_rejected() {
        let config = test_config();

        assert!(matches!(
            verify("not-a-jwt", &config),
            Err(AuthError::InvalidToken)
        ));
        assert!(matches!(verify("", &config), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn non_uuid_subject_rejected() {
        let config = test_config();
        let now = Utc::now().timestamp();

        let claims = TokenClaims {
            sub: "not-a-uuid".to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(config.token_secret.as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            verify(&token, &config),
            Err(AuthError::InvalidToken)
        ));
    }
}
