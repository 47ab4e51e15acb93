use actix_web::{web, HttpResponse, Result};

use crate::error::AppError;
use crate::extractors::{OwnedSubject, RequestId, ValidatedJson};
use crate::infra::db::require_db;
use crate::middleware::CookieAuth;
use crate::repos::requests::{self, NewVolunteerRequest};
use crate::state::app_state::AppState;

async fn create_request(
    body: ValidatedJson<NewVolunteerRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let result = requests::insert(db, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn delete_request(
    id: RequestId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let result = requests::delete(db, id.0).await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn my_requests(
    owner: OwnedSubject,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let requests = requests::find_by_owner(db, owner.email()).await?;
    Ok(HttpResponse::Ok().json(requests))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/requests").route(web::post().to(create_request)))
        .service(web::resource("/requests/{id}").route(web::delete().to(delete_request)))
        .service(
            web::resource("/myRequests/{email}")
                .wrap(CookieAuth)
                .route(web::get().to(my_requests)),
        );
}
