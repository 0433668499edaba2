//! Session cookie construction.
//!
//! `HttpOnly`, `Secure` and `SameSite=Lax` are always set on the session
//! cookie. They are not configurable.

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{DateTime, Utc};
use time::OffsetDateTime;

/// Path attribute shared by the session cookie and its removal.
const COOKIE_PATH: &str = "/";

/// Builds the session cookie carrying `token` until `expires_at`.
pub fn session_cookie(name: &str, token: &str, expires_at: DateTime<Utc>) -> Cookie<'static> {
    let builder = Cookie::build((name.to_owned(), token.to_owned()))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .path(COOKIE_PATH);

    match OffsetDateTime::from_unix_timestamp(expires_at.timestamp()) {
        Ok(expires) => builder.expires(expires).build(),
        Err(_) => {
            tracing::warn!(%expires_at, "Session expiry out of cookie range, issuing session cookie");
            builder.build()
        }
    }
}

/// Builds a cookie that deletes the session cookie in the browser.
pub fn removal_cookie(name: &str) -> Cookie<'static> {
    Cookie::build((name.to_owned(), ""))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .path(COOKIE_PATH)
        .max_age(time::Duration::ZERO)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build()
}
