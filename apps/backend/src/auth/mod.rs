//! Session authentication: identity tokens, the cookie that carries them,
//! and the rejection taxonomy of the request gate.

pub mod claims;
pub mod cookie;
pub mod jwt;

use thiserror::Error;

pub use claims::{Claims, Identity};
pub use cookie::CookieConfig;
pub use jwt::{mint_access_token, verify_access_token, verify_access_token_at, TokenError};

/// Why the gate rejected a request.
///
/// The first three become 401 and the last becomes 403. Only logs see the
/// difference between the 401 kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("missing token")]
    MissingToken,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("subject mismatch")]
    SubjectMismatch,
}

impl AuthError {
    /// Stable reason string for structured logs.
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::MissingToken => "missing_token",
            Self::InvalidSignature => "invalid_signature",
            Self::Expired => "expired",
            Self::SubjectMismatch => "subject_mismatch",
        }
    }
}

impl From<TokenError> for AuthError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::InvalidSignature => AuthError::InvalidSignature,
            TokenError::Expired => AuthError::Expired,
        }
    }
}
