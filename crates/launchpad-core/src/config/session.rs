//! Session guard configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::types::PathPrefix;

/// Session guard configuration.
///
/// Passed into the guard at construction. The cookie security attributes
/// (`HttpOnly`, `Secure`, `SameSite=Lax`) are absent: they are
/// fixed by the guard and cannot be relaxed through configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Sliding session lifetime in seconds, applied on every refresh.
    #[serde(default = "default_duration")]
    pub duration_seconds: u64,
    /// Path unauthenticated visitors are redirected to.
    #[serde(default = "default_sign_in_path")]
    pub sign_in_path: String,
    /// Path prefixes that require a valid session.
    #[serde(default = "default_protected_prefixes")]
    pub protected_prefixes: Vec<String>,
    /// Path prefixes the guard never runs on (API surface, static assets).
    #[serde(default = "default_excluded_prefixes")]
    pub excluded_prefixes: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            duration_seconds: default_duration(),
            sign_in_path: default_sign_in_path(),
            protected_prefixes: default_protected_prefixes(),
            excluded_prefixes: default_excluded_prefixes(),
        }
    }
}

impl SessionConfig {
    /// Session lifetime as a `chrono` duration, bounded to `1..=i32::MAX` seconds.
    pub fn duration(&self) -> Result<chrono::Duration, AppError> {
        i64::try_from(self.duration_seconds)
            .ok()
            .filter(|secs| (1..=MAX_DURATION_SECONDS).contains(secs))
            .and_then(chrono::Duration::try_seconds)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "session.duration_seconds must be between 1 and {MAX_DURATION_SECONDS}"
                ))
            })
    }

    /// Parsed protected prefixes.
    pub fn protected(&self) -> Result<Vec<PathPrefix>, AppError> {
        parse_prefixes("session.protected_prefixes", &self.protected_prefixes)
    }

    /// Parsed excluded prefixes.
    pub fn excluded(&self) -> Result<Vec<PathPrefix>, AppError> {
        parse_prefixes("session.excluded_prefixes", &self.excluded_prefixes)
    }

    /// Checks the session settings on their own, without the rest of `AppConfig`.
    pub fn validate(&self) -> Result<(), AppError> {
        if !is_cookie_token(&self.cookie_name) {
            return Err(AppError::configuration(format!(
                "session.cookie_name '{}' is not a valid cookie name",
                self.cookie_name
            )));
        }

        self.duration()?;

        if !self.sign_in_path.starts_with('/') {
            return Err(AppError::configuration(
                "session.sign_in_path must start with '/'",
            ));
        }

        let protected = self.protected()?;
        self.excluded()?;

        if protected.iter().any(|p| p.matches(&self.sign_in_path)) {
            return Err(AppError::configuration(format!(
                "session.sign_in_path '{}' is itself protected",
                self.sign_in_path
            )));
        }

        Ok(())
    }
}

/// Longest accepted session lifetime, in seconds.
const MAX_DURATION_SECONDS: i64 = i32::MAX as i64;

fn parse_prefixes(field: &str, raw: &[String]) -> Result<Vec<PathPrefix>, AppError> {
    raw.iter()
        .map(|p| {
            PathPrefix::new(p)
                .map_err(|e| AppError::configuration(format!("{field}: {}", e.message)))
        })
        .collect()
}

/// RFC 6265 `token`: visible ASCII minus separators.
fn is_cookie_token(name: &str) -> bool {
    const SEPARATORS: &[u8] = b"()<>@,;:\\\"/[]?={} \t";
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_graphic() && !SEPARATORS.contains(&b))
}

fn default_cookie_name() -> String {
    "session".to_string()
}

fn default_duration() -> u64 {
    24 * 60 * 60
}

fn default_sign_in_path() -> String {
    "/sign-in".to_string()
}

fn default_protected_prefixes() -> Vec<String> {
    vec!["/dashboard".to_string()]
}

fn default_excluded_prefixes() -> Vec<String> {
    vec![
        "/api".to_string(),
        "/_next/static".to_string(),
        "/_next/image".to_string(),
        "/favicon.ico".to_string(),
    ]
}
