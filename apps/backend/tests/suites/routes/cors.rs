use actix_web::http::header::{ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN};
use actix_web::http::StatusCode;
use actix_web::test;

use crate::support::{build_test_state, create_test_app};

const FRONTEND: &str = "http://localhost:5173";

#[actix_web::test]
async fn gate_rejection_carries_cors_headers() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state)
        .with_prod_routes()
        .build_with_cors(&[FRONTEND.to_string()])
        .await;

    let req = test::TestRequest::get()
        .uri("/myPost/alice@example.com")
        .insert_header((ORIGIN, FRONTEND))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        resp.headers()
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some(FRONTEND)
    );
    assert_eq!(
        resp.headers()
            .get(ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
    assert!(resp.headers().contains_key("x-request-id"));
    Ok(())
}

#[actix_web::test]
async fn open_routes_echo_allowed_origin() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state)
        .with_prod_routes()
        .build_with_cors(&[FRONTEND.to_string()])
        .await;

    let req = test::TestRequest::get()
        .uri("/posts")
        .insert_header((ORIGIN, FRONTEND))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some(FRONTEND)
    );
    Ok(())
}
