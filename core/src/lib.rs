//! Client core for a posts CRUD application backed by a
//! JSONPlaceholder-style REST API.
//!
//! # Overview
//! Two pieces form the system:
//! - [`PostGateway`] — stateless request/response mapper for the `/posts`
//!   resource, split into `build_*`/`parse_*` so the core never touches
//!   the network itself (host-does-IO pattern).
//! - [`PostListController`] — owns the accumulated result set, page
//!   cursor, local search filter, and loading flag; drives fetches through
//!   a caller-supplied [`Transport`] and notifies subscribers on every
//!   state change.
//!
//! # Design
//! - Pagination uses the full-page heuristic: more data is assumed to
//!   remain iff the last page came back exactly `page_size` long.
//! - Search is purely local over already-fetched pages.
//! - Create/update/delete resynchronize with a full reload on success
//!   rather than editing local state optimistically.
//! - Types use owned `String`/`Vec` fields so requests and responses move
//!   freely across the transport seam.

pub mod controller;
pub mod error;
pub mod gateway;
pub mod http;
pub mod types;

pub use controller::{ListState, PostListController, DEFAULT_PAGE_SIZE};
pub use error::ApiError;
pub use gateway::PostGateway;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use types::Post;
