use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use backend_test_support::unique_helpers::unique_email;
use serde_json::{json, Value};

use crate::support::auth::{mint_test_token, session_cookie};
use crate::support::factory::{create_post, create_request};
use crate::support::{build_test_state, create_test_app};

fn request_body(post_id: &str, volunteer: &str) -> Value {
    json!({
        "postId": post_id,
        "title": "Beach cleanup",
        "image": "https://img.example.test/beach.png",
        "category": "environment",
        "description": "Pick up litter",
        "location": "North Beach",
        "numberOfVolunteer": 5,
        "deadline": "2030-05-01T09:00:00Z",
        "organizerName": "Dana",
        "organizerEmail": "dana@example.test",
        "volunteerName": "Sam",
        "email": volunteer,
        "suggestion": "Bring gloves",
    })
}

#[actix_web::test]
async fn filed_request_defaults_to_requested() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database").clone();
    let sec = state.security.clone();
    let post_id = create_post(&db, "dana@example.test", "Beach cleanup").await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let volunteer = unique_email("sam");
    let req = test::TestRequest::post()
        .uri("/requests")
        .set_json(request_body(&post_id.to_string(), &volunteer))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let inserted: Value = test::read_body_json(resp).await;
    assert_eq!(inserted["acknowledged"], true);

    let req = test::TestRequest::get()
        .uri(&format!("/myRequests/{volunteer}"))
        .cookie(session_cookie(&mint_test_token(&volunteer, &sec)))
        .to_request();
    let requests: Vec<Value> = test::read_body_json(test::call_service(&app, req).await).await;

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["id"], inserted["insertedId"]);
    assert_eq!(requests[0]["status"], "requested");
    assert_eq!(requests[0]["suggestion"], "Bring gloves");
    assert_eq!(requests[0]["organizerEmail"], "dana@example.test");
    Ok(())
}

#[actix_web::test]
async fn explicit_status_is_kept() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database").clone();
    let sec = state.security.clone();
    let app = create_test_app(state).with_prod_routes().build().await;

    let volunteer = unique_email("sam");
    let post_id = create_post(&db, "dana@example.test", "Beach cleanup").await?;
    let mut body = request_body(&post_id.to_string(), &volunteer);
    body["status"] = json!("accepted");
    let req = test::TestRequest::post().uri("/requests").set_json(body).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/myRequests/{volunteer}"))
        .cookie(session_cookie(&mint_test_token(&volunteer, &sec)))
        .to_request();
    let requests: Vec<Value> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(requests[0]["status"], "accepted");
    Ok(())
}

#[actix_web::test]
async fn delete_request_reports_count() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database").clone();
    let post_id = create_post(&db, "dana@example.test", "Beach cleanup").await?;
    let id = create_request(&db, post_id, &unique_email("sam")).await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::delete()
        .uri(&format!("/requests/{id}"))
        .to_request();
    let result: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(result, json!({ "acknowledged": true, "deletedCount": 1 }));

    let req = test::TestRequest::delete()
        .uri(&format!("/requests/{id}"))
        .to_request();
    let result: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(result["deletedCount"], 0);
    Ok(())
}

#[actix_web::test]
async fn malformed_request_id_is_bad_request() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::delete().uri("/requests/abc").to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "INVALID_REQUEST_ID",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn request_without_volunteer_email_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let body = request_body(&uuid::Uuid::new_v4().to_string(), "");
    let req = test::TestRequest::post().uri("/requests").set_json(body).to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "VALIDATION_ERROR",
        StatusCode::BAD_REQUEST,
        Some("email"),
    )
    .await;
    Ok(())
}
