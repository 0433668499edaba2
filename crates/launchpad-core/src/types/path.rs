//! Segment-aware request path prefixes.

use std::fmt;

use crate::error::AppError;

/// A path prefix used to classify request paths.
///
/// Matching is case-sensitive and respects segment boundaries: `/dashboard`
/// matches `/dashboard`, `/dashboard/` and `/dashboard/general`, but not
/// `/dashboardX` or `/dashboard-staging`. The root prefix `/` matches every
/// path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathPrefix(String);

impl PathPrefix {
    /// Creates a prefix, removing any trailing slashes.
    pub fn new(raw: &str) -> Result<Self, AppError> {
        if !raw.starts_with('/') {
            return Err(AppError::validation(format!(
                "path prefix '{raw}' must start with '/'"
            )));
        }

        let trimmed = raw.trim_end_matches('/');
        Ok(Self(trimmed.to_string()))
    }

    /// Returns whether `path` falls under this prefix.
    pub fn matches(&self, path: &str) -> bool {
        // Root prefix was trimmed to the empty string.
        if self.0.is_empty() {
            return path.starts_with('/');
        }

        match path.strip_prefix(self.0.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Returns whether any of `prefixes` matches `path`.
    pub fn any_matches(prefixes: &[PathPrefix], path: &str) -> bool {
        prefixes.iter().any(|p| p.matches(path))
    }

    /// The normalized prefix string.
    pub fn as_str(&self) -> &str {
        if self.0.is_empty() { "/" } else { &self.0 }
    }
}

impl fmt::Display for PathPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
