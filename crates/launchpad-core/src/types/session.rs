//! Decoded session token content.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The decoded content of a session token.
///
/// On the wire this is a flat JSON object: `sub`, `expires`, and any number
/// of additional claims. Claims the application does not interpret are kept
/// in [`SessionPayload::claims`] in their original order and re-emitted
/// unchanged when the payload is signed again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPayload {
    /// Opaque identifier of the authenticated principal.
    #[serde(rename = "sub")]
    pub subject: String,
    /// Absolute expiry, the only source of truth for session lifetime.
    #[serde(rename = "expires", with = "iso8601")]
    pub expires_at: DateTime<Utc>,
    /// Additional claims carried through untouched.
    #[serde(flatten)]
    pub claims: Map<String, Value>,
}

impl SessionPayload {
    /// Creates a payload with no additional claims.
    pub fn new(subject: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            subject: subject.into(),
            expires_at: expires_at.trunc_subsecs(3),
            claims: Map::new(),
        }
    }

    /// Adds an additional claim.
    pub fn with_claim(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.claims.insert(key.into(), value.into());
        self
    }

    /// Returns a copy with only the expiry replaced.
    ///
    /// The expiry is truncated to milliseconds, the precision of the wire format.
    pub fn with_expiry(&self, expires_at: DateTime<Utc>) -> Self {
        Self {
            subject: self.subject.clone(),
            expires_at: expires_at.trunc_subsecs(3),
            claims: self.claims.clone(),
        }
    }

    /// Whether the payload has expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix.
pub mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Formats a timestamp, e.g. `2026-10-15T12:00:00.000Z`.
    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
