//! SeaORM adapters. Functions here return `sea_orm::DbErr`; the repos layer
//! maps to `DomainError`.

pub mod posts_sea;
pub mod requests_sea;
