//! Session cookie gate
//!
//! Reads the session token from the configured cookie, verifies it, and
//! stores the verified `Identity` in request extensions. Runs only on
//! subject-scoped routes. A missing, tampered, or expired token is answered
//! with a rendered 401 before the handler (and its extractors) run; the
//! rejection is a response, not an `Err`, so outer middleware (CORS, trace
//! headers) still decorates it.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::warn;

use crate::auth::jwt::verify_access_token;
use crate::auth::AuthError;
use crate::error::AppError;
use crate::state::app_state::AppState;

pub struct CookieAuth;

impl<S, B> Transform<S, ServiceRequest> for CookieAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = CookieAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CookieAuthMiddleware { service }))
    }
}

pub struct CookieAuthMiddleware<S> {
    service: S,
}

// Must run inside the returned future: the body reads the trace id
// scoped by `RequestTrace`.
fn reject<B>(req: ServiceRequest, reason: AuthError) -> ServiceResponse<EitherBody<B>> {
    warn!(auth.reason = reason.reason(), "request rejected by session gate");
    req.error_response(AppError::unauthorized(reason))
        .map_into_right_body()
}

impl<S, B> Service<ServiceRequest> for CookieAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let app_state = match req.app_data::<web::Data<AppState>>().cloned() {
            Some(state) => state,
            None => {
                return Box::pin(async move {
                    Ok(req
                        .error_response(AppError::internal("AppState not available"))
                        .map_into_right_body())
                });
            }
        };

        let token = req
            .cookie(&app_state.cookies.name)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty());

        let token = match token {
            Some(token) => token,
            None => return Box::pin(async move { Ok(reject(req, AuthError::MissingToken)) }),
        };

        match verify_access_token(&token, &app_state.security) {
            Ok(identity) => {
                req.extensions_mut().insert(identity);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(e) => {
                let reason = AuthError::from(e);
                Box::pin(async move { Ok(reject(req, reason)) })
            }
        }
    }
}
