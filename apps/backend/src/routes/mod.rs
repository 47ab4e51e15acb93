use actix_web::web;

pub mod auth;
pub mod health;
pub mod posts;
pub mod requests;

#[derive(Debug, serde::Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Register every route. The session gate is attached per resource inside
/// `posts` and `requests`, so this is the same in production and tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(auth::configure_routes)
        .configure(posts::configure_routes)
        .configure(requests::configure_routes);
}
