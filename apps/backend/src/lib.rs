#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod state;
pub mod trace_ctx;

pub use auth::{mint_access_token, verify_access_token, AuthError, Claims, Identity};
pub use config::{AppConfig, DbKind, RuntimeEnv};
pub use error::AppError;
pub use extractors::{OwnedSubject, PostId, RequestId, ValidatedJson};
pub use infra::db::{bootstrap_db, connect_db, require_db};
pub use infra::state::build_state;
pub use middleware::{cors_middleware, CookieAuth, RequestTrace, StructuredLogger, TraceSpan};
pub use state::{AppState, SecurityConfig};

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
