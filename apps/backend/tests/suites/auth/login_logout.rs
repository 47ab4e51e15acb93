use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use backend_test_support::unique_helpers::unique_email;
use serde_json::{json, Value};
use volunteer_backend::auth::{verify_access_token, CookieConfig};
use volunteer_backend::config::RuntimeEnv;

use crate::support::app_builder::TestResponse;
use crate::support::test_state::test_state_builder;
use crate::support::{build_test_state, create_test_app};

fn response_cookie(resp: &TestResponse, name: &str) -> Cookie<'static> {
    resp.response()
        .cookies()
        .find(|c| c.name() == name)
        .map(|c| c.into_owned())
        .unwrap_or_else(|| panic!("response should set cookie '{name}'"))
}

#[actix_web::test]
async fn login_sets_http_only_session_cookie() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let sec = state.security.clone();
    let app = create_test_app(state).with_prod_routes().build().await;

    let email = unique_email("alice");
    let req = test::TestRequest::post()
        .uri("/jwt")
        .set_json(json!({ "email": email, "name": "Alice" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = response_cookie(&resp, "token");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.max_age(), None);

    let identity = verify_access_token(cookie.value(), &sec)?;
    assert_eq!(identity.email, email);
    assert_eq!(identity.name.as_deref(), Some("Alice"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true }));
    Ok(())
}

#[actix_web::test]
async fn production_cookie_is_secure_and_cross_site() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state_builder()
        .with_cookies(CookieConfig::for_env(RuntimeEnv::Production))
        .build()
        .await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/jwt")
        .set_json(json!({ "email": "alice@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let cookie = response_cookie(&resp, "token");
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::None));
    Ok(())
}

#[actix_web::test]
async fn login_cookie_opens_subject_routes() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let email = unique_email("alice");
    let req = test::TestRequest::post()
        .uri("/jwt")
        .set_json(json!({ "email": email }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let cookie = response_cookie(&resp, "token");

    let req = test::TestRequest::get()
        .uri(&format!("/myPost/{email}"))
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let posts: Vec<Value> = test::read_body_json(resp).await;
    assert!(posts.is_empty());
    Ok(())
}

#[actix_web::test]
async fn login_rejects_empty_email() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/jwt")
        .set_json(json!({ "email": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.response().cookies().next().is_none());

    assert_problem_details_from_service_response(
        resp,
        "INVALID_EMAIL",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn login_rejects_body_without_email() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/jwt")
        .set_json(json!({ "name": "Alice" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        Some("Invalid JSON"),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn logout_expires_the_cookie() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post().uri("/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = response_cookie(&resp, "token");
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Strict));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true }));
    Ok(())
}

/// Logout only clears the browser's copy. A replayed token value keeps
/// working until it expires, since nothing is revoked server side.
#[actix_web::test]
async fn token_replayed_after_logout_still_verifies() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let email = unique_email("alice");
    let req = test::TestRequest::post()
        .uri("/jwt")
        .set_json(json!({ "email": email }))
        .to_request();
    let login_cookie = response_cookie(&test::call_service(&app, req).await, "token");

    let req = test::TestRequest::post()
        .uri("/logout")
        .cookie(login_cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/myPost/{email}"))
        .cookie(login_cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}
