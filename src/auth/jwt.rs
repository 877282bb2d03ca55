// JWT token creation and verification
// HS256 tokens carrying the user id; lifetime comes from configuration

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// JWT claims structure
///
/// # Fields
/// * `sub` - Subject (user_id)
/// * `iat` - Issued-at time (seconds since epoch)
/// * `exp` - Expiry time (seconds since epoch)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID (subject)
    pub sub: Uuid,
    /// Issued-at timestamp (seconds since epoch)
    pub iat: usize,
    /// Expiry timestamp (seconds since epoch)
    pub exp: usize,
}

/// Reasons a token can be refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Signature and format were fine but `exp` is in the past
    #[error("jwt expired")]
    Expired,

    /// Malformed token, bad signature or missing claims
    #[error("{0}")]
    Invalid(String),
}

/// Creates a JWT token for a user
///
/// # Arguments
/// * `user_id` - The user's ID to include in the token
/// * `secret` - The secret key for signing
/// * `ttl` - How long the token stays valid
///
/// # Example
/// ```
/// use around_api::auth::jwt::create_token;
/// use chrono::Duration;
/// use uuid::Uuid;
///
/// let token = create_token(Uuid::new_v4(), "your-secret-key", Duration::days(7))
///     .expect("valid token");
/// assert_eq!(token.split('.').count(), 3);
/// ```
pub fn create_token(user_id: Uuid, secret: &str, ttl: Duration) -> Result<String, String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        iat: now.timestamp() as usize,
        exp: (now + ttl).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| e.to_string())
}

/// Verifies and decodes a JWT token
///
/// # Example
/// ```
/// use around_api::auth::jwt::{create_token, verify_token};
/// use chrono::Duration;
/// use uuid::Uuid;
///
/// let user_id = Uuid::new_v4();
/// let secret = "your-secret-key";
/// let token = create_token(user_id, secret, Duration::hours(1)).unwrap();
///
/// let claims = verify_token(&token, secret).expect("valid token");
/// assert_eq!(claims.sub, user_id);
/// ```
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::Invalid("invalid signature".to_string()),
        ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
            TokenError::Invalid("jwt malformed".to_string())
        }
        _ => TokenError::Invalid(e.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-key-for-unit-tests";

    #[test]
    fn create_and_verify_token() {
        let user_id = Uuid::new_v4();
        let token = create_token(user_id, TEST_SECRET, Duration::hours(8)).expect("valid token");

        let claims = verify_token(&token, TEST_SECRET).expect("valid verification");
        assert_eq!(claims.sub, user_id);
    }

    #[test]
    fn wrong_secret_is_invalid_signature() {
        let token = create_token(Uuid::new_v4(), TEST_SECRET, Duration::hours(8)).unwrap();

        let result = verify_token(&token, "wrong-secret");
        assert_eq!(
            result.unwrap_err(),
            TokenError::Invalid("invalid signature".to_string())
        );
    }

    #[test]
    fn garbage_token_is_malformed() {
        let result = verify_token("invalid.token.string", TEST_SECRET);
        assert_eq!(
            result.unwrap_err(),
            TokenError::Invalid("jwt malformed".to_string())
        );
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        // well past the default 60s leeway
        let token = create_token(Uuid::new_v4(), TEST_SECRET, Duration::hours(-1)).unwrap();

        let result = verify_token(&token, TEST_SECRET);
        assert_eq!(result.unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn token_expiry_follows_ttl() {
        let token = create_token(Uuid::new_v4(), TEST_SECRET, Duration::days(7)).unwrap();

        let claims = verify_token(&token, TEST_SECRET).expect("valid verification");
        let expected = (Utc::now() + Duration::days(7)).timestamp();

        assert!(claims.exp as i64 > Utc::now().timestamp());
        assert!(claims.exp as i64 <= expected + 10); // 10 second buffer
        assert!(claims.iat <= claims.exp);
    }
}
