use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;

fn parse_id(req: &HttpRequest, code: ErrorCode, label: &str) -> Result<Uuid, AppError> {
    let raw = req
        .match_info()
        .get("id")
        .ok_or_else(|| AppError::bad_request(code, "Missing id parameter"))?;

    Uuid::parse_str(raw).map_err(|_| AppError::bad_request(code, format!("Invalid {label} id: {raw}")))
}

/// Post id taken from the `{id}` path segment. Existence is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostId(pub Uuid);

impl FromRequest for PostId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_id(req, ErrorCode::InvalidPostId, "post").map(PostId))
    }
}

/// Volunteer request id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl FromRequest for RequestId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_id(req, ErrorCode::InvalidRequestId, "request").map(RequestId))
    }
}
