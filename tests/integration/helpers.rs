//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::header::{COOKIE, LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, Request, StatusCode};
use axum_extra::extract::cookie::Cookie;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;

use launchpad_api::{AppState, build_app};
use launchpad_auth::jwt::JwtSessionCodec;
use launchpad_core::config::AppConfig;
use launchpad_core::traits::{FixedClock, TokenCodec};
use launchpad_core::types::SessionPayload;

/// Secret shared by the app under test and the tokens the tests mint
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Instant the app's clock is pinned to
    pub now: DateTime<Utc>,
    codec: JwtSessionCodec,
}

impl TestApp {
    /// Create a test application with default session settings
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a test application from an explicit config
    pub fn with_config(config: AppConfig) -> Self {
        let now = Utc
            .with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
            .single()
            .expect("valid fixed instant");
        let clock = Arc::new(FixedClock(now));

        let codec = JwtSessionCodec::new(&config.auth, clock.clone());
        let state =
            AppState::with_clock(config.clone(), clock).expect("Failed to build app state");

        Self {
            router: build_app(state),
            config,
            now,
            codec,
        }
    }

    /// Sign a token for `subject` that expires `ttl` after the pinned clock
    pub async fn token_for(&self, subject: &str, ttl: Duration) -> String {
        self.sign(&SessionPayload::new(subject, self.now + ttl)).await
    }

    /// Sign an arbitrary payload with the app's secret
    pub async fn sign(&self, payload: &SessionPayload) -> String {
        self.codec.sign(payload).await.expect("Failed to sign token")
    }

    /// Verify a token with the app's secret and clock
    pub async fn verify(&self, token: &str) -> Option<SessionPayload> {
        self.codec.verify(token).await.ok()
    }

    /// `Cookie` header value carrying `token` as the session cookie
    pub fn session_header(&self, token: &str) -> String {
        format!("{}={}", self.config.session.cookie_name, token)
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, cookie: Option<&str>) -> TestResponse {
        self.request_with(method, path, cookie, &[]).await
    }

    /// Make an HTTP request with extra headers
    pub async fn request_with(
        &self,
        method: &str,
        path: &str,
        cookie: Option<&str>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        self.send(method, path, cookie, headers, Body::empty()).await
    }

    /// POST a raw JSON body
    pub async fn post_json(&self, path: &str, body: &str) -> TestResponse {
        self.send(
            "POST",
            path,
            None,
            &[("content-type", "application/json")],
            Body::from(body.to_owned()),
        )
        .await
    }

    /// POST a body without a `Content-Type` header
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        self.send("POST", path, None, &[], Body::from(body.to_owned()))
            .await
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        cookie: Option<&str>,
        headers: &[(&str, &str)],
        body: Body,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        if let Some(cookie) = cookie {
            req = req.header(COOKIE, cookie);
        }
        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = req.body(body).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&body_bytes).into_owned(),
            cookie_name: self.config.session.cookie_name.clone(),
        }
    }
}

/// Default config with a test secret
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.session_secret = TEST_SECRET.to_string();
    config
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Body as text
    pub body: String,
    cookie_name: String,
}

impl TestResponse {
    /// Every `Set-Cookie` header, parsed
    pub fn set_cookies(&self) -> Vec<Cookie<'static>> {
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .map(|v| {
                let raw = v.to_str().expect("Set-Cookie is not ASCII").to_owned();
                Cookie::parse(raw).expect("Failed to parse Set-Cookie")
            })
            .collect()
    }

    /// The session cookie written by the response, if any
    pub fn session_cookie(&self) -> Option<Cookie<'static>> {
        self.set_cookies()
            .into_iter()
            .find(|c| c.name() == self.cookie_name)
    }

    /// `Location` header value
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|v| v.to_str().ok())
    }

    /// Body parsed as JSON
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }

    /// Whether the session cookie was written as a deletion
    pub fn clears_session(&self) -> bool {
        self.session_cookie().is_some_and(|c| {
            c.value().is_empty() && c.max_age().is_some_and(|age| age.is_zero())
        })
    }
}
