use actix_web::{web, HttpResponse, Result};

use crate::error::AppError;
use crate::extractors::{OwnedSubject, PostId, ValidatedJson};
use crate::infra::db::require_db;
use crate::middleware::CookieAuth;
use crate::repos::posts::{self, NewPost, PostChanges};
use crate::state::app_state::AppState;

async fn list_posts(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let posts = posts::find_all(db).await?;
    Ok(HttpResponse::Ok().json(posts))
}

async fn get_post(
    id: PostId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let post = posts::require_by_id(db, id.0).await?;
    Ok(HttpResponse::Ok().json(post))
}

async fn create_post(
    body: ValidatedJson<NewPost>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let result = posts::insert(db, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn update_post(
    id: PostId,
    body: ValidatedJson<PostChanges>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let result = posts::update(db, id.0, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn delete_post(
    id: PostId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let result = posts::delete(db, id.0).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Posts organized by the caller. `OwnedSubject` rejects before any query.
async fn my_posts(
    owner: OwnedSubject,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let posts = posts::find_by_owner(db, owner.email()).await?;
    Ok(HttpResponse::Ok().json(posts))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/posts")
            .route(web::get().to(list_posts))
            .route(web::post().to(create_post)),
    )
    .service(
        web::resource("/posts/{id}")
            .route(web::get().to(get_post))
            .route(web::put().to(update_post))
            .route(web::delete().to(delete_post)),
    )
    .service(
        web::resource("/myPost/{email}")
            .wrap(CookieAuth)
            .route(web::get().to(my_posts)),
    );
}
