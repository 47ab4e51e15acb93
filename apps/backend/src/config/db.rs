use std::env;

use crate::error::AppError;

/// Which database backend to connect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    /// Hosted Postgres (production)
    Postgres,
    /// Private in-memory SQLite (tests, local experiments)
    SqliteMemory,
}

/// Build the database URL for `kind` from the environment.
///
/// Postgres: `DATABASE_URL` wins when set; otherwise the URL is assembled
/// from `DB_USER`/`DB_PASS` (required) and `DB_HOST`/`DB_PORT`/`DB_NAME`.
pub fn db_url(kind: DbKind) -> Result<String, AppError> {
    match kind {
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
        DbKind::Postgres => {
            if let Ok(url) = env::var("DATABASE_URL") {
                if !url.trim().is_empty() {
                    return Ok(url);
                }
            }
            let username = must_var("DB_USER")?;
            let password = must_var("DB_PASS")?;
            let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = env::var("DB_NAME").unwrap_or_else(|_| "volunteer".to_string());
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
    }
}

fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
