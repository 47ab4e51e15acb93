use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;
use tracing::debug;

use super::claims::{Claims, Identity};
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Lifetime of a session token.
pub const TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Signature mismatch, tampering, or a token that does not decode at all.
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
}

fn unix_seconds(t: SystemTime) -> Option<i64> {
    t.duration_since(UNIX_EPOCH)
        .ok()
        .map(|d| d.as_secs() as i64)
}

/// Mint a HS256 session token for `identity` with a 24-hour TTL.
pub fn mint_access_token(
    identity: &Identity,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = unix_seconds(now)
        .ok_or_else(|| AppError::internal("Failed to get current time"))?;

    let claims = Claims {
        identity: identity.clone(),
        iat,
        exp: iat + TOKEN_TTL.as_secs() as i64,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify a session token against the current time.
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<Identity, TokenError> {
    verify_access_token_at(token, SystemTime::now(), security)
}

/// Verify a session token as of `now`.
///
/// Valid while `now < exp`. Expiry is checked here rather than by
/// `jsonwebtoken` so the boundary is exact (no leeway) and testable.
pub fn verify_access_token_at(
    token: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<Identity, TokenError> {
    let mut validation = Validation::new(security.algorithm);
    validation.validate_exp = false;
    validation.leeway = 0;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map_err(|e| {
        debug!(jwt_error = ?e.kind(), "token failed to decode");
        TokenError::InvalidSignature
    })?;

    let now = unix_seconds(now).unwrap_or(0);
    if now >= data.claims.exp {
        return Err(TokenError::Expired);
    }

    Ok(data.claims.identity)
}
