//! Request DTOs.

use serde::{Deserialize, Serialize};

/// Query string of `GET /api/cloud/greet`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GreetQuery {
    /// Greeting word, defaults to `hi`.
    pub greeting: Option<String>,
}

/// Body of `POST /api/cloud/greet`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GreetRequest {
    /// Greeting word, defaults to `hi`.
    pub greeting: Option<String>,
    /// Name to address.
    pub name: Option<String>,
}
