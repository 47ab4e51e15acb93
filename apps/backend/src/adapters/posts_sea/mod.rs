//! SeaORM adapter for the posts collection.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::posts;

pub mod dto;

pub use dto::{PostCreate, PostUpdate};

/// Outcome of an update: whether a row matched and whether it changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<posts::Model>, sea_orm::DbErr> {
    posts::Entity::find()
        .order_by_asc(posts::Column::CreatedAt)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<Option<posts::Model>, sea_orm::DbErr> {
    posts::Entity::find_by_id(id).one(conn).await
}

pub async fn find_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Vec<posts::Model>, sea_orm::DbErr> {
    posts::Entity::find()
        .filter(posts::Column::Email.eq(email))
        .order_by_asc(posts::Column::CreatedAt)
        .all(conn)
        .await
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PostCreate,
) -> Result<posts::Model, sea_orm::DbErr> {
    let active = posts::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(dto.title),
        image: Set(dto.image),
        category: Set(dto.category),
        description: Set(dto.description),
        location: Set(dto.location),
        number_of_volunteer: Set(dto.number_of_volunteer),
        deadline: Set(dto.deadline),
        organizer_name: Set(dto.organizer_name),
        email: Set(dto.email),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    active.insert(conn).await
}

/// Overwrite the editable fields of post `id`.
pub async fn update_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
    dto: PostUpdate,
) -> Result<UpdateOutcome, sea_orm::DbErr> {
    let Some(existing) = posts::Entity::find_by_id(id).one(conn).await? else {
        return Ok(UpdateOutcome {
            matched: 0,
            modified: 0,
        });
    };

    let current = PostUpdate {
        title: existing.title.clone(),
        image: existing.image.clone(),
        category: existing.category.clone(),
        description: existing.description.clone(),
        location: existing.location.clone(),
        number_of_volunteer: existing.number_of_volunteer,
        deadline: existing.deadline,
    };
    if current == dto {
        return Ok(UpdateOutcome {
            matched: 1,
            modified: 0,
        });
    }

    let mut active: posts::ActiveModel = existing.into();
    active.title = Set(dto.title);
    active.image = Set(dto.image);
    active.category = Set(dto.category);
    active.description = Set(dto.description);
    active.location = Set(dto.location);
    active.number_of_volunteer = Set(dto.number_of_volunteer);
    active.deadline = Set(dto.deadline);
    active.update(conn).await?;

    Ok(UpdateOutcome {
        matched: 1,
        modified: 1,
    })
}

/// Returns the number of deleted rows (0 or 1).
pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<u64, sea_orm::DbErr> {
    let res = posts::Entity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected)
}
