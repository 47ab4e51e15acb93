use std::time::SystemTime;

use actix_web::{web, HttpResponse, Result};
use tracing::info;

use super::SuccessResponse;
use crate::auth::claims::Identity;
use crate::auth::jwt::mint_access_token;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::logging::pii::Redacted;
use crate::state::app_state::AppState;

/// Issue a session cookie for an identity the front end has already
/// authenticated.
async fn issue_token(
    body: ValidatedJson<Identity>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let identity = body.into_inner();

    if identity.email.trim().is_empty() {
        return Err(AppError::bad_request(
            ErrorCode::InvalidEmail,
            "Email cannot be empty",
        ));
    }

    let token = mint_access_token(&identity, SystemTime::now(), &app_state.security)?;
    info!(subject = %Redacted(identity.subject()), "session token issued");

    Ok(HttpResponse::Ok()
        .cookie(app_state.cookies.session_cookie(&token))
        .json(SuccessResponse::ok()))
}

/// Clear the session cookie. The token itself stays valid until it expires.
async fn logout(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok()
        .cookie(app_state.cookies.removal_cookie())
        .json(SuccessResponse::ok()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/jwt").route(web::post().to(issue_token)))
        .service(web::resource("/logout").route(web::post().to(logout)));
}
