use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::auth::cookie::CookieConfig;

/// Shared, read-only resources handed to every handler via `web::Data`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent in some tests)
    db: Option<DatabaseConnection>,
    /// Token signing settings
    pub security: SecurityConfig,
    /// Session cookie attributes
    pub cookies: CookieConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, security: SecurityConfig, cookies: CookieConfig) -> Self {
        Self {
            db: Some(db),
            security,
            cookies,
        }
    }

    pub fn new_without_db(security: SecurityConfig, cookies: CookieConfig) -> Self {
        Self {
            db: None,
            security,
            cookies,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
