use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use volunteer_backend::errors::ErrorCode;
use volunteer_backend::AppError;

use crate::support::auth::{mint_test_token, session_cookie};
use crate::support::{build_test_state, create_test_app};

async fn failing_handler() -> Result<HttpResponse, AppError> {
    Err(AppError::invalid(ErrorCode::ValidationError, "Example failure"))
}

fn header(resp: &crate::support::app_builder::TestResponse, name: &str) -> String {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_else(|| panic!("{name} header should be present"))
        .to_string()
}

#[actix_web::test]
async fn handler_error_carries_request_trace_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state)
        .with_routes(|cfg| {
            cfg.route("/_test/error", web::get().to(failing_handler));
        })
        .build()
        .await;

    let req = test::TestRequest::get().uri("/_test/error").to_request();
    let resp = test::call_service(&app, req).await;
    let request_id = header(&resp, "x-request-id");

    let problem = assert_problem_details_from_service_response(
        resp,
        "VALIDATION_ERROR",
        StatusCode::BAD_REQUEST,
        Some("Example failure"),
    )
    .await;

    assert_eq!(problem.trace_id, request_id);
    assert_eq!(problem.title, "Validation Error");
    assert_eq!(problem.type_, "https://volunteer.app/errors/VALIDATION_ERROR");
    Ok(())
}

#[actix_web::test]
async fn gate_rejection_carries_request_trace_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/myPost/alice@example.com")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let request_id = header(&resp, "x-request-id");

    let problem = assert_problem_details_from_service_response(
        resp,
        "UNAUTHORIZED",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;

    assert_ne!(problem.trace_id, "unknown");
    assert_eq!(problem.trace_id, request_id);
    Ok(())
}

#[actix_web::test]
async fn successful_responses_carry_request_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/posts").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(uuid::Uuid::parse_str(&header(&resp, "x-request-id")).is_ok());
    Ok(())
}

#[actix_web::test]
async fn gated_requests_pass_through_the_full_stack() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let sec = state.security.clone();
    let app = create_test_app(state).with_prod_routes().build().await;
    let cookie = session_cookie(&mint_test_token("alice@example.com", &sec));

    for _ in 0..2 {
        let req = test::TestRequest::get()
            .uri("/myPost/alice@example.com")
            .cookie(cookie.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(uuid::Uuid::parse_str(&header(&resp, "x-request-id")).is_ok());
    }
    Ok(())
}
