use std::env;

use crate::auth::cookie::CookieConfig;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Deployment environment; selects the cookie policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeEnv {
    #[default]
    Development,
    Production,
}

impl RuntimeEnv {
    /// `APP_ENV=production` (case-insensitive) selects production; anything
    /// else, including unset, is development.
    pub fn from_env() -> Self {
        match env::var("APP_ENV") {
            Ok(v) if v.trim().eq_ignore_ascii_case("production") => RuntimeEnv::Production,
            _ => RuntimeEnv::Development,
        }
    }
}

const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Process configuration assembled from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub runtime_env: RuntimeEnv,
    pub security: SecurityConfig,
    pub cookies: CookieConfig,
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Fails when the signing secret is missing or the port is malformed.
    pub fn from_env() -> Result<Self, AppError> {
        let security = SecurityConfig::from_env()?;

        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::config(format!("PORT must be a valid port number, got '{raw}'")))?,
            Err(_) => 5000,
        };

        let runtime_env = RuntimeEnv::from_env();
        let mut cookies = CookieConfig::for_env(runtime_env);
        if let Ok(name) = env::var("AUTH_COOKIE_NAME") {
            let name = name.trim();
            if !name.is_empty() {
                cookies = cookies.with_name(name);
            }
        }

        let cors_allowed_origins =
            parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        Ok(Self {
            host,
            port,
            runtime_env,
            security,
            cookies,
            cors_allowed_origins,
        })
    }
}

/// Comma-separated origins; blank, "null" and non-http(s) entries are
/// dropped. Falls back to the local front-end dev server.
pub fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.trim_end_matches('/').to_string())
        .collect();

    if origins.is_empty() {
        vec![DEFAULT_ALLOWED_ORIGIN.to_string()]
    } else {
        origins
    }
}
