use std::fmt;

use jsonwebtoken::Algorithm;

use crate::error::AppError;

/// Environment variable holding the token signing secret.
pub const SECRET_ENV_VAR: &str = "ACCESS_TOKEN_SECRET";

/// Token signing settings. Read-only after startup.
#[derive(Clone)]
pub struct SecurityConfig {
    /// Secret for signing and verifying session tokens
    pub jwt_secret: Vec<u8>,
    /// Signing algorithm (HS256)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }

    /// Load the secret from `ACCESS_TOKEN_SECRET`. Missing or blank is a
    /// configuration error; the process must not start without it.
    pub fn from_env() -> Result<Self, AppError> {
        let secret = std::env::var(SECRET_ENV_VAR).map_err(|_| {
            AppError::config(format!(
                "Required environment variable '{SECRET_ENV_VAR}' is not set"
            ))
        })?;
        if secret.trim().is_empty() {
            return Err(AppError::config(format!(
                "Environment variable '{SECRET_ENV_VAR}' must not be empty"
            )));
        }
        Ok(Self::new(secret.into_bytes()))
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}
