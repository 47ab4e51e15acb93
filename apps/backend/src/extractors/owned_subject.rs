//! Ownership check for subject-scoped routes.
//!
//! `CookieAuth` must run first and store the verified `Identity`. The
//! extractor then compares its subject with the fully percent-decoded
//! `{email}` path segment. The comparison is exact: no case folding, no
//! trimming.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::Deserialize;
use tracing::warn;

use crate::auth::{AuthError, Identity};
use crate::error::AppError;
use crate::logging::pii::Redacted;

/// Verified identity whose subject equals the requested `{email}`.
#[derive(Debug, Clone)]
pub struct OwnedSubject(pub Identity);

impl OwnedSubject {
    pub fn email(&self) -> &str {
        self.0.subject()
    }
}

#[derive(Deserialize)]
struct EmailPath {
    email: String,
}

fn owned_subject(req: &HttpRequest) -> Result<OwnedSubject, AppError> {
    let identity = req
        .extensions()
        .get::<Identity>()
        .cloned()
        .ok_or(AppError::unauthorized(AuthError::MissingToken))?;

    // `match_info().get` keeps `%2B`, `%2F` and `%25` encoded.
    let requested = req
        .match_info()
        .load::<EmailPath>()
        .map(|p| p.email)
        .unwrap_or_default();

    if identity.subject() != requested {
        warn!(
            subject = %Redacted(identity.subject()),
            requested = %Redacted(&requested),
            auth.reason = AuthError::SubjectMismatch.reason(),
            "subject does not own the requested resource"
        );
        return Err(AppError::forbidden());
    }

    Ok(OwnedSubject(identity))
}

impl FromRequest for OwnedSubject {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(owned_subject(req))
    }
}
