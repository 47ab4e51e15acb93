//! Domain-level error type used by repos and adapters.
//!
//! HTTP- and DB-agnostic. Handlers return `Result<T, crate::error::AppError>`
//! and convert from `DomainError` via `From<DomainError> for AppError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Post,
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or business rule violation
    Validation(String),
    /// Duplicate key or similar semantic conflict
    Conflict(String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(d) => write!(f, "validation error: {d}"),
            DomainError::Conflict(d) => write!(f, "conflict: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::Conflict(detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}

/// Translate a `DbErr` into a `DomainError`. Driver detail is kept out of
/// the message; it is logged at the call site instead.
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        match &e {
            sea_orm::DbErr::RecordNotFound(_) => {
                DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found")
            }
            sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
                tracing::error!(error = %e, "database unavailable");
                DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable")
            }
            _ => {
                let msg = e.to_string();
                if msg.contains("UNIQUE constraint failed") || msg.contains("23505") {
                    return DomainError::conflict("Duplicate key");
                }
                if msg.to_ascii_lowercase().contains("timeout") {
                    tracing::warn!(error = %e, "database timeout");
                    return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
                }
                tracing::error!(error = %e, "database error");
                DomainError::infra(
                    InfraErrorKind::Other("DbErr".into()),
                    "Database operation failed",
                )
            }
        }
    }
}
