use sea_orm::DatabaseConnection;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;
use volunteer_backend::repos::posts::{self, NewPost};
use volunteer_backend::repos::requests::{self, NewVolunteerRequest};
use volunteer_backend::AppError;

pub fn new_post(owner_email: &str, title: &str) -> NewPost {
    NewPost {
        title: title.to_string(),
        image: "https://img.example.test/beach.png".to_string(),
        category: "environment".to_string(),
        description: "Pick up litter along the shore".to_string(),
        location: "North Beach".to_string(),
        number_of_volunteer: 5,
        deadline: OffsetDateTime::now_utc() + Duration::days(14),
        organizer_name: "Organizer".to_string(),
        email: owner_email.to_string(),
    }
}

pub fn new_request(post_id: Uuid, volunteer_email: &str) -> NewVolunteerRequest {
    NewVolunteerRequest {
        post_id,
        title: "Beach cleanup".to_string(),
        image: "https://img.example.test/beach.png".to_string(),
        category: "environment".to_string(),
        description: "Pick up litter along the shore".to_string(),
        location: "North Beach".to_string(),
        number_of_volunteer: 5,
        deadline: OffsetDateTime::now_utc() + Duration::days(14),
        organizer_name: "Organizer".to_string(),
        organizer_email: "organizer@example.test".to_string(),
        volunteer_name: "Volunteer".to_string(),
        email: volunteer_email.to_string(),
        suggestion: String::new(),
        status: None,
    }
}

/// Insert a post owned by `owner_email` and return its id.
pub async fn create_post(
    db: &DatabaseConnection,
    owner_email: &str,
    title: &str,
) -> Result<Uuid, AppError> {
    Ok(posts::insert(db, new_post(owner_email, title))
        .await?
        .inserted_id)
}

pub async fn create_request(
    db: &DatabaseConnection,
    post_id: Uuid,
    volunteer_email: &str,
) -> Result<Uuid, AppError> {
    Ok(requests::insert(db, new_request(post_id, volunteer_email))
        .await?
        .inserted_id)
}
