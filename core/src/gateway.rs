//! Stateless HTTP request builder and response parser for the posts API.
//!
//! # Design
//! `PostGateway` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`; a `Transport` executes the round-trip in between. Every
//! request carries the fixed client headers, and write requests add a UTF-8
//! JSON content type. There is no retry, backoff, or timeout logic here —
//! each call either succeeds once or fails once.

use log::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Post;

/// Identifying agent string sent with every request.
pub const USER_AGENT: &str = "posts-core/0.1";

/// Stateless request/response mapper for the `/posts` resource.
#[derive(Debug, Clone)]
pub struct PostGateway {
    base_url: String,
}

impl PostGateway {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn read_headers() -> Vec<(String, String)> {
        vec![
            ("user-agent".to_string(), USER_AGENT.to_string()),
            ("accept".to_string(), "application/json".to_string()),
        ]
    }

    fn write_headers() -> Vec<(String, String)> {
        let mut headers = Self::read_headers();
        headers.push((
            "content-type".to_string(),
            "application/json; charset=utf-8".to_string(),
        ));
        headers
    }

    pub fn build_list_page(&self, page: u64, limit: usize) -> HttpRequest {
        debug!("building list request for page {page} (limit {limit})");
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/posts?_page={page}&_limit={limit}", self.base_url),
            headers: Self::read_headers(),
            body: None,
        }
    }

    pub fn build_get(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/posts/{id}", self.base_url),
            headers: Self::read_headers(),
            body: None,
        }
    }

    pub fn build_create(&self, post: &Post) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(post).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/posts", self.base_url),
            headers: Self::write_headers(),
            body: Some(body),
        })
    }

    /// Fails fast with a `Validation` error when the post has no `id` —
    /// there is no resource path to PUT to.
    pub fn build_update(&self, post: &Post) -> Result<HttpRequest, ApiError> {
        let id = post
            .id
            .ok_or_else(|| ApiError::Validation("cannot update a post without an id".to_string()))?;
        let body =
            serde_json::to_string(post).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/posts/{id}", self.base_url),
            headers: Self::write_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/posts/{id}", self.base_url),
            headers: Self::read_headers(),
            body: None,
        }
    }

    pub fn parse_list_page(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        let body = check_status(response, 200, |status, body| ApiError::Retrieval {
            status,
            body,
        })?;
        decode(&body)
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<Post, ApiError> {
        let body = check_status(response, 200, |status, body| ApiError::Retrieval {
            status,
            body,
        })?;
        decode(&body)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Post, ApiError> {
        let body = check_status(response, 201, |status, body| ApiError::Creation {
            status,
            body,
        })?;
        decode(&body)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Post, ApiError> {
        let body = check_status(response, 200, |status, body| ApiError::Update { status, body })?;
        decode(&body)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(response, 200, |status, body| ApiError::Deletion {
            status,
            body,
        })?;
        Ok(())
    }
}

/// Return the response body when the status matches, otherwise the
/// operation-specific error carrying the status and body for diagnostics.
fn check_status(
    response: HttpResponse,
    expected: u16,
    err: impl FnOnce(u16, String) -> ApiError,
) -> Result<String, ApiError> {
    if response.status == expected {
        Ok(response.body)
    } else {
        Err(err(response.status, response.body))
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
