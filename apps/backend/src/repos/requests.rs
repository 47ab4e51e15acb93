//! Volunteer requests repository.

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::{require_non_empty, volunteer_count, DeleteResult, InsertResult};
use crate::adapters::requests_sea::{self as requests_adapter, RequestCreate};
use crate::errors::domain::DomainError;

pub const DEFAULT_STATUS: &str = "requested";

/// A volunteer request as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerRequest {
    pub id: Uuid,
    pub post_id: Uuid,
    pub title: String,
    pub image: String,
    pub category: String,
    pub description: String,
    pub location: String,
    pub number_of_volunteer: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub deadline: OffsetDateTime,
    pub organizer_name: String,
    pub organizer_email: String,
    pub volunteer_name: String,
    pub email: String,
    pub suggestion: String,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Body of `POST /requests`. `email` is the volunteer's address.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVolunteerRequest {
    pub post_id: Uuid,
    pub title: String,
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub location: String,
    pub number_of_volunteer: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub deadline: OffsetDateTime,
    pub organizer_name: String,
    pub organizer_email: String,
    pub volunteer_name: String,
    pub email: String,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl NewVolunteerRequest {
    fn into_create(self) -> Result<RequestCreate, DomainError> {
        require_non_empty("email", &self.email)?;
        require_non_empty("volunteerName", &self.volunteer_name)?;
        let status = self
            .status
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STATUS.to_string());
        Ok(RequestCreate {
            number_of_volunteer: volunteer_count(self.number_of_volunteer)?,
            post_id: self.post_id,
            title: self.title,
            image: self.image,
            category: self.category,
            description: self.description,
            location: self.location,
            deadline: self.deadline,
            organizer_name: self.organizer_name,
            organizer_email: self.organizer_email,
            volunteer_name: self.volunteer_name,
            email: self.email,
            suggestion: self.suggestion,
            status,
        })
    }
}

/// Requests filed by volunteer `email`.
pub async fn find_by_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Vec<VolunteerRequest>, DomainError> {
    let requests = requests_adapter::find_by_email(conn, email).await?;
    Ok(requests.into_iter().map(VolunteerRequest::from).collect())
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    new_request: NewVolunteerRequest,
) -> Result<InsertResult, DomainError> {
    let created = requests_adapter::insert(conn, new_request.into_create()?).await?;
    Ok(InsertResult::inserted(created.id))
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<DeleteResult, DomainError> {
    let deleted = requests_adapter::delete_by_id(conn, id).await?;
    Ok(DeleteResult::deleted(deleted))
}

impl From<crate::entities::requests::Model> for VolunteerRequest {
    fn from(model: crate::entities::requests::Model) -> Self {
        Self {
            id: model.id,
            post_id: model.post_id,
            title: model.title,
            image: model.image,
            category: model.category,
            description: model.description,
            location: model.location,
            number_of_volunteer: model.number_of_volunteer,
            deadline: model.deadline,
            organizer_name: model.organizer_name,
            organizer_email: model.organizer_email,
            volunteer_name: model.volunteer_name,
            email: model.email,
            suggestion: model.suggestion,
            status: model.status,
            created_at: model.created_at,
        }
    }
}
