use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Posts {
    Table,
    Id,
    Title,
    Image,
    Category,
    Description,
    Location,
    NumberOfVolunteer,
    Deadline,
    OrganizerName,
    Email,
    CreatedAt,
}

#[derive(Iden)]
enum Requests {
    Table,
    Id,
    PostId,
    Title,
    Image,
    Category,
    Description,
    Location,
    NumberOfVolunteer,
    Deadline,
    OrganizerName,
    OrganizerEmail,
    VolunteerName,
    Email,
    Suggestion,
    Status,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Posts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Posts::Title).string().not_null())
                    .col(ColumnDef::new(Posts::Image).string().not_null())
                    .col(ColumnDef::new(Posts::Category).string().not_null())
                    .col(ColumnDef::new(Posts::Description).text().not_null())
                    .col(ColumnDef::new(Posts::Location).string().not_null())
                    .col(
                        ColumnDef::new(Posts::NumberOfVolunteer)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Posts::Deadline)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Posts::OrganizerName).string().not_null())
                    .col(ColumnDef::new(Posts::Email).string().not_null())
                    .col(
                        ColumnDef::new(Posts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // "mine" lookups filter on the owner email
        manager
            .create_index(
                Index::create()
                    .name("ix_posts_email")
                    .table(Posts::Table)
                    .col(Posts::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Requests::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Requests::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Requests::PostId).uuid().not_null())
                    .col(ColumnDef::new(Requests::Title).string().not_null())
                    .col(ColumnDef::new(Requests::Image).string().not_null())
                    .col(ColumnDef::new(Requests::Category).string().not_null())
                    .col(ColumnDef::new(Requests::Description).text().not_null())
                    .col(ColumnDef::new(Requests::Location).string().not_null())
                    .col(
                        ColumnDef::new(Requests::NumberOfVolunteer)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Requests::Deadline)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Requests::OrganizerName).string().not_null())
                    .col(ColumnDef::new(Requests::OrganizerEmail).string().not_null())
                    .col(ColumnDef::new(Requests::VolunteerName).string().not_null())
                    .col(ColumnDef::new(Requests::Email).string().not_null())
                    .col(ColumnDef::new(Requests::Suggestion).text().not_null())
                    .col(
                        ColumnDef::new(Requests::Status)
                            .string()
                            .not_null()
                            .default("requested"),
                    )
                    .col(
                        ColumnDef::new(Requests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_requests_email")
                    .table(Requests::Table)
                    .col(Requests::Email)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop index before table, reverse order
        manager
            .drop_index(
                Index::drop()
                    .name("ix_requests_email")
                    .table(Requests::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Requests::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_posts_email")
                    .table(Posts::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Posts::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
