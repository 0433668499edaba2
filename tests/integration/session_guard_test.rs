//! Integration tests for the session guard middleware.

mod helpers;

use axum::http::StatusCode;
use axum_extra::extract::cookie::SameSite;
use chrono::Duration;

use launchpad_core::types::SessionPayload;

const HOST: (&str, &str) = ("host", "localhost:3000");

#[tokio::test]
async fn test_protected_without_cookie_redirects() {
    let app = helpers::TestApp::new();

    let response = app
        .request_with("GET", "/dashboard", None, &[HOST])
        .await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.location(), Some("http://localhost:3000/sign-in"));
    assert!(response.set_cookies().is_empty());
}

#[tokio::test]
async fn test_protected_redirect_keeps_forwarded_scheme() {
    let app = helpers::TestApp::new();

    let response = app
        .request_with(
            "GET",
            "/dashboard/security?tab=keys",
            None,
            &[("host", "app.example.com"), ("x-forwarded-proto", "https")],
        )
        .await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.location(), Some("https://app.example.com/sign-in"));
}

#[tokio::test]
async fn test_protected_with_valid_cookie_refreshes() {
    let app = helpers::TestApp::new();
    let payload = SessionPayload::new("user-42", app.now + Duration::minutes(5))
        .with_claim("team", 7)
        .with_claim("role", "owner");
    let token = app.sign(&payload).await;

    let response = app
        .request("GET", "/dashboard/general", Some(&app.session_header(&token)))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "General settings for user-42");

    let cookie = response.session_cookie().expect("session cookie refreshed");
    assert_ne!(cookie.value(), token);
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.path(), Some("/"));

    let expected = app.now + Duration::hours(24);
    let expires = cookie.expires_datetime().expect("expires set");
    assert_eq!(expires.unix_timestamp(), expected.timestamp());

    let refreshed = app.verify(cookie.value()).await.expect("refreshed token verifies");
    assert_eq!(refreshed.subject, "user-42");
    assert_eq!(refreshed.expires_at, expected);
    assert_eq!(refreshed.claims, payload.claims);
}

#[tokio::test]
async fn test_protected_with_expired_cookie_redirects_and_clears() {
    let app = helpers::TestApp::new();
    let token = app.token_for("user-42", Duration::seconds(-1)).await;

    let response = app
        .request_with(
            "GET",
            "/dashboard",
            Some(&app.session_header(&token)),
            &[HOST],
        )
        .await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.location(), Some("http://localhost:3000/sign-in"));
    assert!(response.clears_session());
}

#[tokio::test]
async fn test_protected_with_foreign_signature_redirects_and_clears() {
    let app = helpers::TestApp::new();

    let mut other = helpers::test_config();
    other.auth.session_secret = "some-other-secret".to_string();
    let forger = helpers::TestApp::with_config(other);
    let token = forger.token_for("user-42", Duration::hours(1)).await;

    let response = app
        .request("GET", "/dashboard", Some(&app.session_header(&token)))
        .await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert!(response.clears_session());
}

#[tokio::test]
async fn test_public_with_invalid_cookie_clears_and_serves() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/pricing", Some(&app.session_header("garbage")))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "Pricing");
    assert!(response.clears_session());
}

#[tokio::test]
async fn test_public_with_valid_cookie_refreshes() {
    let app = helpers::TestApp::new();
    let token = app.token_for("user-42", Duration::minutes(1)).await;

    let response = app
        .request("GET", "/", Some(&app.session_header(&token)))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let cookie = response.session_cookie().expect("session cookie refreshed");
    let refreshed = app.verify(cookie.value()).await.expect("valid token");
    assert_eq!(refreshed.expires_at, app.now + Duration::hours(24));
}

#[tokio::test]
async fn test_public_without_cookie_is_untouched() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/sign-in", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "Sign in");
    assert!(response.set_cookies().is_empty());
}

#[tokio::test]
async fn test_post_with_valid_cookie_is_not_refreshed() {
    let app = helpers::TestApp::new();
    let token = app.token_for("user-42", Duration::minutes(5)).await;

    let response = app
        .request("POST", "/dashboard/general", Some(&app.session_header(&token)))
        .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.set_cookies().is_empty());
}

#[tokio::test]
async fn test_post_with_invalid_cookie_is_not_checked() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/dashboard/general",
            Some(&app.session_header("garbage")),
        )
        .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.set_cookies().is_empty());
}

#[tokio::test]
async fn test_post_to_protected_without_cookie_redirects() {
    let app = helpers::TestApp::new();

    let response = app.request("POST", "/dashboard/general", None).await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.location(), Some("/sign-in"));
}

#[tokio::test]
async fn test_lookalike_path_is_public() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/dashboardX", Some(&app.session_header("garbage")))
        .await;

    // Not protected, so the invalid cookie is cleared without a redirect.
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.clears_session());
}

#[tokio::test]
async fn test_other_cookies_are_left_alone() {
    let app = helpers::TestApp::new();
    let token = app.token_for("user-42", Duration::minutes(5)).await;
    let header = format!("theme=dark; {}; locale=en", app.session_header(&token));

    let response = app.request("GET", "/dashboard", Some(&header)).await;

    assert_eq!(response.status, StatusCode::OK);
    let cookies = response.set_cookies();
    assert_eq!(cookies.len(), 1);
    assert_eq!(cookies[0].name(), app.config.session.cookie_name);
}

#[tokio::test]
async fn test_custom_protected_prefixes() {
    let mut config = helpers::test_config();
    config.session.protected_prefixes = vec!["/pricing".to_string()];
    let app = helpers::TestApp::with_config(config);

    let pricing = app.request("GET", "/pricing", None).await;
    assert_eq!(pricing.status, StatusCode::FOUND);

    let dashboard = app.request("GET", "/dashboard", None).await;
    assert_eq!(dashboard.status, StatusCode::OK);
    assert_eq!(dashboard.body, "Dashboard");
}
