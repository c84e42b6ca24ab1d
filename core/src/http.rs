//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values
//! without ever touching the network; the [`Transport`] implementation
//! supplied by the host executes the actual I/O. This separation keeps the
//! core deterministic and easy to test: unit tests drive the controller
//! with an in-memory transport, integration tests plug in a real HTTP
//! client.
//!
//! All fields use owned types (`String`, `Vec`) so values can move freely
//! across the seam without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `PostGateway::build_*` methods and handed to a [`Transport`]
/// for execution.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a [`Transport`] after executing an `HttpRequest`, then
/// passed to `PostGateway::parse_*` methods for interpretation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes a single HTTP round-trip.
///
/// Implementations must return `Ok` for any response the server produced,
/// whatever its status code — status interpretation belongs to the gateway.
/// `Err` carries a human-readable message and is reserved for transport
/// failures where no response exists (connection refused, DNS, timeout).
pub trait Transport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, String>;
}
