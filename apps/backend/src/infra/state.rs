use sea_orm::DatabaseConnection;

use crate::auth::cookie::CookieConfig;
use crate::config::db::DbKind;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

enum DbSource {
    None,
    Bootstrap(DbKind),
    Connection(DatabaseConnection),
}

/// Builder for AppState (used in both tests and main).
pub struct StateBuilder {
    security_config: Option<SecurityConfig>,
    cookies: CookieConfig,
    db: DbSource,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: None,
            cookies: CookieConfig::default(),
            db: DbSource::None,
        }
    }

    /// Connect to `kind` and run migrations during `build`.
    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db = DbSource::Bootstrap(kind);
        self
    }

    /// Use an already-open connection as is (mock databases in tests).
    pub fn with_connection(mut self, conn: DatabaseConnection) -> Self {
        self.db = DbSource::Connection(conn);
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = Some(security_config);
        self
    }

    pub fn with_cookies(mut self, cookies: CookieConfig) -> Self {
        self.cookies = cookies;
        self
    }

    /// A state without a signing secret is never built.
    pub async fn build(self) -> Result<AppState, AppError> {
        let security = self
            .security_config
            .ok_or_else(|| AppError::config("security config (signing secret) is required"))?;

        match self.db {
            DbSource::None => Ok(AppState::new_without_db(security, self.cookies)),
            DbSource::Bootstrap(kind) => {
                let conn = bootstrap_db(kind).await?;
                Ok(AppState::new(conn, security, self.cookies))
            }
            DbSource::Connection(conn) => Ok(AppState::new(conn, security, self.cookies)),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
