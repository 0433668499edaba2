//! Integration tests for the API surface and the guard's exclusions.

mod helpers;

use axum::http::StatusCode;
use chrono::Duration;

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_greet_query() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/api/cloud/greet?greeting=hello", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["message"], "Howdy! hello cloud!");
    assert_eq!(body["service"], "cloud-greet-service");
}

#[tokio::test]
async fn test_greet_named() {
    let app = helpers::TestApp::new();

    let response = app
        .post_json("/api/cloud/greet", r#"{"name":"Ada","greeting":"hey"}"#)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["message"], "Howdy, Ada! hey cloud!");
}

#[tokio::test]
async fn test_greet_named_without_content_type() {
    let app = helpers::TestApp::new();

    let response = app
        .post_raw("/api/cloud/greet", r#"{"name":"Ada"}"#)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["message"], "Howdy, Ada! hi cloud!");
}

#[tokio::test]
async fn test_greet_rejects_malformed_body() {
    let app = helpers::TestApp::new();

    let response = app.post_json("/api/cloud/greet", "{not json").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "Invalid request body");
}

#[tokio::test]
async fn test_api_ignores_invalid_cookie() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/api/health", Some(&app.session_header("garbage")))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.set_cookies().is_empty());
}

#[tokio::test]
async fn test_api_does_not_refresh_valid_cookie() {
    let app = helpers::TestApp::new();
    let token = app.token_for("user-42", Duration::minutes(5)).await;

    let response = app
        .request("GET", "/api/health", Some(&app.session_header(&token)))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.set_cookies().is_empty());
}

#[tokio::test]
async fn test_static_assets_are_excluded() {
    let app = helpers::TestApp::new();
    let cookie = app.session_header("garbage");

    for path in [
        "/_next/static/chunks/main.js",
        "/_next/image",
        "/favicon.ico",
    ] {
        let response = app.request("GET", path, Some(&cookie)).await;
        assert!(
            response.set_cookies().is_empty(),
            "{path} should bypass the session guard"
        );
    }
}

#[tokio::test]
async fn test_lookalike_of_excluded_prefix_is_guarded() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/apiary", Some(&app.session_header("garbage")))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.clears_session());
}

#[tokio::test]
async fn test_unknown_page_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/nowhere", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, "Not found");
}
