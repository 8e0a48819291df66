//! Data Transfer Objects - response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's public information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub login: String,
    pub firstname: String,
    pub lastname: String,
    pub description: Option<String>,
}

/// An article with its author embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub slug: String,
    pub title: String,
    pub headline: String,
    pub content: String,
    pub author: UserResponse,
    pub added_at: DateTime<Utc>,
}

/// Query parameters accepted by `GET /api/article/{slug}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleQuery {
    pub converter: Option<String>,
}
