//! Collection repositories (generic over `ConnectionTrait`).
//!
//! Each operation returns the domain view of what the store did; handlers
//! pass these descriptors to the client unchanged.

use serde::Serialize;
use uuid::Uuid;

use crate::errors::domain::DomainError;

pub mod posts;
pub mod requests;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub acknowledged: bool,
    pub inserted_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl InsertResult {
    fn inserted(id: Uuid) -> Self {
        Self {
            acknowledged: true,
            inserted_id: id,
        }
    }
}

impl DeleteResult {
    fn deleted(count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count: count,
        }
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn volunteer_count(value: u32) -> Result<i32, DomainError> {
    i32::try_from(value)
        .map_err(|_| DomainError::validation("numberOfVolunteer is out of range"))
}
