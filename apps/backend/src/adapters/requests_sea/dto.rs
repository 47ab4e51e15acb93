//! DTOs for requests_sea adapter.

use time::OffsetDateTime;
use uuid::Uuid;

/// A volunteer's request for a post, with a snapshot of the post fields.
#[derive(Debug, Clone)]
pub struct RequestCreate {
    pub post_id: Uuid,
    pub title: String,
    pub image: String,
    pub category: String,
    pub description: String,
    pub location: String,
    pub number_of_volunteer: i32,
    pub deadline: OffsetDateTime,
    pub organizer_name: String,
    pub organizer_email: String,
    pub volunteer_name: String,
    pub email: String,
    pub suggestion: String,
    pub status: String,
}
