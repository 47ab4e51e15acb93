//! Session token and cookie helpers

use std::time::{Duration, SystemTime};

use actix_web::cookie::Cookie;
use volunteer_backend::auth::jwt::TOKEN_TTL;
use volunteer_backend::auth::{mint_access_token, Identity};
use volunteer_backend::state::SecurityConfig;

pub fn mint_test_token(email: &str, sec: &SecurityConfig) -> String {
    mint_access_token(&Identity::new(email), SystemTime::now(), sec)
        .expect("should mint token successfully")
}

/// Token issued just over a day ago, so it has already expired.
pub fn mint_expired_token(email: &str, sec: &SecurityConfig) -> String {
    let issued = SystemTime::now() - TOKEN_TTL - Duration::from_secs(60);
    mint_access_token(&Identity::new(email), issued, sec)
        .expect("should mint expired token successfully")
}

pub fn session_cookie(token: &str) -> Cookie<'static> {
    Cookie::new("token", token.to_string())
}
