use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;
use volunteer_backend::infra::state::build_state;

use crate::support::{build_test_state, create_test_app, test_security};

#[actix_web::test]
async fn health_reports_database_and_migrations() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["migrations"], "m20250601_000001_init");
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
    assert!(body.get("db_error").is_none());
    Ok(())
}

#[actix_web::test]
async fn health_without_database_still_answers() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().with_security(test_security()).build().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["db"], "error");
    assert!(body["db_error"].is_string());
    Ok(())
}

#[actix_web::test]
async fn root_banner_is_plain_text() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().with_security(test_security()).build().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert_eq!(body, "Volunteer backend is running");
    Ok(())
}
