//! Identity payload and the signed claim wrapped around it.

use serde::{Deserialize, Serialize};

/// Identity posted to the login endpoint after out-of-band authentication.
///
/// `email` is the subject: the owner key of every "mine" route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Identity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn subject(&self) -> &str {
        &self.email
    }
}

/// Claims carried in the session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(flatten)]
    pub identity: Identity,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
