//! SeaORM adapter for the requests collection.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::requests;

pub mod dto;

pub use dto::RequestCreate;

pub async fn find_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Vec<requests::Model>, sea_orm::DbErr> {
    requests::Entity::find()
        .filter(requests::Column::Email.eq(email))
        .order_by_asc(requests::Column::CreatedAt)
        .all(conn)
        .await
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RequestCreate,
) -> Result<requests::Model, sea_orm::DbErr> {
    let active = requests::ActiveModel {
        id: Set(Uuid::new_v4()),
        post_id: Set(dto.post_id),
        title: Set(dto.title),
        image: Set(dto.image),
        category: Set(dto.category),
        description: Set(dto.description),
        location: Set(dto.location),
        number_of_volunteer: Set(dto.number_of_volunteer),
        deadline: Set(dto.deadline),
        organizer_name: Set(dto.organizer_name),
        organizer_email: Set(dto.organizer_email),
        volunteer_name: Set(dto.volunteer_name),
        email: Set(dto.email),
        suggestion: Set(dto.suggestion),
        status: Set(dto.status),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    active.insert(conn).await
}

/// Returns the number of deleted rows (0 or 1).
pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<u64, sea_orm::DbErr> {
    let res = requests::Entity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected)
}
