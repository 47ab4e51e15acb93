//! Environment-driven configuration, read once at startup.

pub mod app;
pub mod db;

pub use app::{AppConfig, RuntimeEnv};
pub use db::{db_url, DbKind};
