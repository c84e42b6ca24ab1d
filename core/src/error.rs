//! Error types for the posts client core.
//!
//! # Design
//! Each remote operation gets a dedicated failure variant carrying the raw
//! status code and body, because the surfaced message tells the user which
//! action failed ("could not delete" reads differently from "could not
//! load"). `Validation` is reported before any request is built — zero
//! side effects. `Transport` covers failures where no response exists at
//! all.

use std::fmt;

/// Errors surfaced by the gateway and controller.
#[derive(Debug)]
pub enum ApiError {
    /// Local input rejection: empty title/body, or an update without an id.
    /// No request was issued.
    Validation(String),

    /// A list or get request did not return 200.
    Retrieval { status: u16, body: String },

    /// A create request did not return 201.
    Creation { status: u16, body: String },

    /// An update request did not return 200.
    Update { status: u16, body: String },

    /// A delete request did not return 200.
    Deletion { status: u16, body: String },

    /// The round-trip itself failed; no status code is available.
    Transport(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "invalid input: {msg}"),
            ApiError::Retrieval { status, body } => {
                write!(f, "failed to load posts (HTTP {status}): {body}")
            }
            ApiError::Creation { status, body } => {
                write!(f, "failed to create post (HTTP {status}): {body}")
            }
            ApiError::Update { status, body } => {
                write!(f, "failed to update post (HTTP {status}): {body}")
            }
            ApiError::Deletion { status, body } => {
                write!(f, "failed to delete post (HTTP {status}): {body}")
            }
            ApiError::Transport(msg) => write!(f, "network error: {msg}"),
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ApiError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
