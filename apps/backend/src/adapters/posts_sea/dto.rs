//! DTOs for posts_sea adapter.

use time::OffsetDateTime;

/// Fields of a new post; id and timestamps are assigned by the adapter.
#[derive(Debug, Clone)]
pub struct PostCreate {
    pub title: String,
    pub image: String,
    pub category: String,
    pub description: String,
    pub location: String,
    pub number_of_volunteer: i32,
    pub deadline: OffsetDateTime,
    pub organizer_name: String,
    pub email: String,
}

/// The editable subset of a post. Owner and creation time never change.
#[derive(Debug, Clone, PartialEq)]
pub struct PostUpdate {
    pub title: String,
    pub image: String,
    pub category: String,
    pub description: String,
    pub location: String,
    pub number_of_volunteer: i32,
    pub deadline: OffsetDateTime,
}
