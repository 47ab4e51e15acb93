use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "post_id")]
    pub post_id: Uuid,
    pub title: String,
    pub image: String,
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub location: String,
    #[sea_orm(column_name = "number_of_volunteer")]
    pub number_of_volunteer: i32,
    pub deadline: OffsetDateTime,
    #[sea_orm(column_name = "organizer_name")]
    pub organizer_name: String,
    #[sea_orm(column_name = "organizer_email")]
    pub organizer_email: String,
    #[sea_orm(column_name = "volunteer_name")]
    pub volunteer_name: String,
    /// Volunteer email; owner key of the request
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub suggestion: String,
    pub status: String,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
