// HttpOnly session cookie carrying the identity token.

use actix_web::cookie::{Cookie, SameSite};

use crate::config::app::RuntimeEnv;

/// Default name of the session cookie.
pub const DEFAULT_COOKIE_NAME: &str = "token";

/// Deployment-specific cookie attributes.
///
/// Token verification never looks at these; only the extraction step uses
/// `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub same_site: SameSite,
    pub path: String,
}

impl CookieConfig {
    /// Strict same-site in development, cross-site with `Secure` in production.
    pub fn for_env(env: RuntimeEnv) -> Self {
        match env {
            RuntimeEnv::Development => Self {
                name: DEFAULT_COOKIE_NAME.to_string(),
                secure: false,
                same_site: SameSite::Strict,
                path: "/".to_string(),
            },
            RuntimeEnv::Production => Self {
                name: DEFAULT_COOKIE_NAME.to_string(),
                secure: true,
                same_site: SameSite::None,
                path: "/".to_string(),
            },
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Cookie set at login. It has no explicit expiry, so it lasts for the
    /// browser session.
    pub fn session_cookie(&self, token: &str) -> Cookie<'static> {
        Cookie::build(self.name.clone(), token.to_string())
            .path(self.path.clone())
            .http_only(true)
            .secure(self.secure)
            .same_site(self.same_site)
            .finish()
    }

    /// Cookie sent at logout: same attributes, empty value, immediate expiry.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = self.session_cookie("");
        cookie.make_removal();
        cookie
    }
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self::for_env(RuntimeEnv::Development)
    }
}
