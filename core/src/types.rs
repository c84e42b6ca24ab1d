//! Domain DTOs for the posts API.
//!
//! # Design
//! `Post` mirrors the backend's JSON schema but is defined independently
//! from the mock-server crate; integration tests catch schema drift. The
//! `id` is `Option` because the server assigns it — a freshly composed post
//! has none, and serialization omits the field entirely in that case so
//! create requests never send `"id": null`.

use serde::{Deserialize, Serialize};

/// A single post exchanged with the backend.
///
/// Immutable value: edits go through [`Post::with_text`], which produces a
/// new value carrying the original `id` and `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

impl Post {
    /// A post that has not been sent to the server yet (no `id`).
    pub fn new(user_id: i64, title: &str, body: &str) -> Self {
        Self {
            id: None,
            user_id,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    /// The same post with replacement title and body.
    pub fn with_text(&self, title: &str, body: &str) -> Self {
        Self {
            id: self.id,
            user_id: self.user_id,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    /// Case-insensitive substring match on title or body. The empty query
    /// matches everything.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle) || self.body.to_lowercase().contains(&needle)
    }
}
