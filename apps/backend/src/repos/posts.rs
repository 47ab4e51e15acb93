//! Posts repository.

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::{require_non_empty, volunteer_count, DeleteResult, InsertResult, UpdateResult};
use crate::adapters::posts_sea::{self as posts_adapter, PostCreate, PostUpdate};
use crate::errors::domain::{DomainError, NotFoundKind};

/// A volunteer-need post as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub image: String,
    pub category: String,
    pub description: String,
    pub location: String,
    pub number_of_volunteer: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub deadline: OffsetDateTime,
    pub organizer_name: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
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
    pub email: String,
}

/// Body of `PUT /posts/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostChanges {
    pub title: String,
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub location: String,
    pub number_of_volunteer: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub deadline: OffsetDateTime,
}

impl NewPost {
    fn into_create(self) -> Result<PostCreate, DomainError> {
        require_non_empty("title", &self.title)?;
        require_non_empty("email", &self.email)?;
        Ok(PostCreate {
            number_of_volunteer: volunteer_count(self.number_of_volunteer)?,
            title: self.title,
            image: self.image,
            category: self.category,
            description: self.description,
            location: self.location,
            deadline: self.deadline,
            organizer_name: self.organizer_name,
            email: self.email,
        })
    }
}

impl PostChanges {
    fn into_update(self) -> Result<PostUpdate, DomainError> {
        require_non_empty("title", &self.title)?;
        Ok(PostUpdate {
            number_of_volunteer: volunteer_count(self.number_of_volunteer)?,
            title: self.title,
            image: self.image,
            category: self.category,
            description: self.description,
            location: self.location,
            deadline: self.deadline,
        })
    }
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<Post>, DomainError> {
    let posts = posts_adapter::find_all(conn).await?;
    Ok(posts.into_iter().map(Post::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<Option<Post>, DomainError> {
    let post = posts_adapter::find_by_id(conn, id).await?;
    Ok(post.map(Post::from))
}

/// Like `find_by_id`, but a missing post is `NotFound`.
pub async fn require_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<Post, DomainError> {
    find_by_id(conn, id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Post, format!("Post {id} not found")))
}

/// Posts owned by `email`.
pub async fn find_by_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Vec<Post>, DomainError> {
    let posts = posts_adapter::find_by_email(conn, email).await?;
    Ok(posts.into_iter().map(Post::from).collect())
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    new_post: NewPost,
) -> Result<InsertResult, DomainError> {
    let created = posts_adapter::insert(conn, new_post.into_create()?).await?;
    Ok(InsertResult::inserted(created.id))
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
    changes: PostChanges,
) -> Result<UpdateResult, DomainError> {
    let outcome = posts_adapter::update_by_id(conn, id, changes.into_update()?).await?;
    Ok(UpdateResult {
        acknowledged: true,
        matched_count: outcome.matched,
        modified_count: outcome.modified,
    })
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<DeleteResult, DomainError> {
    let deleted = posts_adapter::delete_by_id(conn, id).await?;
    Ok(DeleteResult::deleted(deleted))
}

impl From<crate::entities::posts::Model> for Post {
    fn from(model: crate::entities::posts::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            image: model.image,
            category: model.category,
            description: model.description,
            location: model.location,
            number_of_volunteer: model.number_of_volunteer,
            deadline: model.deadline,
            organizer_name: model.organizer_name,
            email: model.email,
            created_at: model.created_at,
        }
    }
}
