//! Session guard middleware.
//!
//! Runs [`SessionGuard::evaluate`](launchpad_auth::guard::SessionGuard::evaluate)
//! before the destination handler and applies the decision: forward,
//! forward with a refreshed or deleted session cookie, or redirect to
//! sign-in. Only the session cookie is ever written.

use axum::extract::{Request, State};
use axum::http::header::{HOST, LOCATION};
use axum::http::{HeaderValue, StatusCode, Uri};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

use launchpad_auth::guard::GuardDecision;

use crate::cookies::{removal_cookie, session_cookie};
use crate::extractors::CurrentSession;
use crate::state::AppState;

/// Gates protected pages and refreshes the session cookie on navigation.
///
/// Paths matched by the configured exclusions (API surface, static assets)
/// pass straight through without the cookie being read.
pub async fn session_guard(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let guard = &state.session_guard;
    let path = request.uri().path().to_owned();

    if !guard.applies_to(&path) {
        return next.run(request).await;
    }

    let token = jar.get(guard.cookie_name()).map(|c| c.value().to_owned());
    let decision = guard
        .evaluate(&path, request.method().as_str(), token.as_deref())
        .await;

    match decision {
        GuardDecision::Continue => next.run(request).await,
        GuardDecision::Refresh(refreshed) => {
            let cookie =
                session_cookie(guard.cookie_name(), &refreshed.token, refreshed.expires_at());
            request
                .extensions_mut()
                .insert(CurrentSession(refreshed.payload));

            let response = next.run(request).await;
            (jar.add(cookie), response).into_response()
        }
        GuardDecision::ClearAndContinue => {
            let response = next.run(request).await;
            (jar.add(removal_cookie(guard.cookie_name())), response).into_response()
        }
        GuardDecision::Redirect { clear_cookie } => {
            let location = sign_in_location(&request, guard.sign_in_path());
            let redirect = (StatusCode::FOUND, [(LOCATION, location)]);

            if clear_cookie {
                (jar.add(removal_cookie(guard.cookie_name())), redirect).into_response()
            } else {
                redirect.into_response()
            }
        }
    }
}

/// Resolves the sign-in path against the origin of `request`.
///
/// The scheme comes from the request URI, then `X-Forwarded-Proto`, then
/// defaults to `http`. The authority comes from the URI, then `Host`.
/// Without an authority the bare path is used.
fn sign_in_location(request: &Request, sign_in_path: &str) -> HeaderValue {
    let uri = request.uri();
    let headers = request.headers();

    let scheme = uri
        .scheme_str()
        .map(str::to_owned)
        .or_else(|| {
            headers
                .get("x-forwarded-proto")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.split(',').next())
                .map(|v| v.trim().to_owned())
        })
        .unwrap_or_else(|| "http".to_owned());

    let authority = uri
        .authority()
        .map(|a| a.as_str().to_owned())
        .or_else(|| {
            headers
                .get(HOST)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned)
        });

    let target = match authority {
        Some(authority) => Uri::builder()
            .scheme(scheme.as_str())
            .authority(authority.as_str())
            .path_and_query(sign_in_path)
            .build()
            .map(|u| u.to_string())
            .unwrap_or_else(|_| sign_in_path.to_owned()),
        None => sign_in_path.to_owned(),
    };

    HeaderValue::try_from(target).unwrap_or_else(|_| HeaderValue::from_static("/"))
}
