//! List state controller: pagination, local search, and CRUD mediation.
//!
//! # Design
//! `PostListController` owns the accumulated result set, the page cursor,
//! the search filter, and the loading flag, and is the only writer of that
//! state. The rendering layer reads [`ListState`] through
//! [`PostListController::state`], forwards user intents through the
//! mutation methods, and redraws when a subscribed listener fires — there
//! is no framework lifecycle coupling.
//!
//! Every mutating operation takes `&mut self` and runs its fetch to
//! completion inside the call, so a refresh can never race an in-flight
//! page load; `is_loading` remains the observable guard that makes
//! [`PostListController::load_next_page`] a no-op while a fetch is being
//! reported to listeners.

use log::{debug, warn};

use crate::error::ApiError;
use crate::gateway::PostGateway;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::Post;

/// Page length used as both the request limit and the full-page threshold.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Observable list state. Read-only for collaborators; only the controller
/// mutates it.
#[derive(Debug)]
pub struct ListState {
    /// Every post fetched so far, in server order. Appended to per page
    /// fetch, fully replaced on refresh.
    pub all_posts: Vec<Post>,
    /// The subsequence of `all_posts` matching `search_query`, same
    /// relative order. Recomputed whenever either input changes.
    pub filtered_posts: Vec<Post>,
    /// Last successfully fetched page, 1-based. The next fetch requests
    /// `page + 1`.
    pub page: u64,
    pub page_size: usize,
    /// False once a fetch returns fewer than `page_size` items.
    pub has_more: bool,
    pub is_loading: bool,
    /// Stored verbatim; matching is case-insensitive, empty means no
    /// filter.
    pub search_query: String,
}

impl ListState {
    fn new(page_size: usize) -> Self {
        Self {
            all_posts: Vec::new(),
            filtered_posts: Vec::new(),
            page: 1,
            page_size,
            has_more: true,
            is_loading: false,
            search_query: String::new(),
        }
    }

    fn apply_filter(&mut self) {
        self.filtered_posts = self
            .all_posts
            .iter()
            .filter(|post| post.matches(&self.search_query))
            .cloned()
            .collect();
    }
}

type Listener = Box<dyn FnMut(&ListState)>;

/// Drives the post list: pagination, local search, and create/update/delete
/// with a full reload on success (no optimistic local edits — the server
/// echo is not trusted to match a later list).
pub struct PostListController<T: Transport> {
    gateway: PostGateway,
    transport: T,
    state: ListState,
    listeners: Vec<Listener>,
}

impl<T: Transport> PostListController<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self::with_page_size(base_url, transport, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(base_url: &str, transport: T, page_size: usize) -> Self {
        Self {
            gateway: PostGateway::new(base_url),
            transport,
            state: ListState::new(page_size),
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Register a change listener. Listeners fire after every committed
    /// state mutation, including the `is_loading` transition at fetch
    /// start, so a renderer can show progress.
    pub fn subscribe(&mut self, listener: impl FnMut(&ListState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self) {
        let state = &self.state;
        for listener in &mut self.listeners {
            listener(state);
        }
    }

    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.transport.execute(request).map_err(ApiError::Transport)
    }

    fn fetch_page(&mut self, page: u64) -> Result<Vec<Post>, ApiError> {
        let request = self.gateway.build_list_page(page, self.state.page_size);
        let response = self.execute(request)?;
        self.gateway.parse_list_page(response)
    }

    /// Reset and load the first page. Prior contents are cleared up front;
    /// on failure the state stays empty and the error is surfaced.
    pub fn refresh(&mut self) -> Result<(), ApiError> {
        self.state.all_posts.clear();
        self.state.filtered_posts.clear();
        self.state.page = 1;
        self.state.has_more = true;
        self.state.is_loading = true;
        self.notify();

        let result = self.fetch_page(1);
        self.state.is_loading = false;
        match result {
            Ok(posts) => {
                debug!("refresh loaded {} posts", posts.len());
                self.state.has_more = posts.len() == self.state.page_size;
                self.state.all_posts = posts;
                self.state.apply_filter();
                self.notify();
                Ok(())
            }
            Err(e) => {
                warn!("refresh failed: {e}");
                self.notify();
                Err(e)
            }
        }
    }

    /// Fetch the next page and append it. A no-op while a fetch is in
    /// flight or once the last page came back short.
    pub fn load_next_page(&mut self) -> Result<(), ApiError> {
        if self.state.is_loading || !self.state.has_more {
            return Ok(());
        }
        self.state.is_loading = true;
        self.notify();

        let next = self.state.page + 1;
        let result = self.fetch_page(next);
        self.state.is_loading = false;
        match result {
            Ok(posts) => {
                debug!("page {next} loaded {} posts", posts.len());
                self.state.has_more = posts.len() == self.state.page_size;
                self.state.page = next;
                self.state.all_posts.extend(posts);
                self.state.apply_filter();
                self.notify();
                Ok(())
            }
            Err(e) => {
                warn!("loading page {next} failed: {e}");
                self.notify();
                Err(e)
            }
        }
    }

    /// Store the query verbatim and re-derive the filtered view. Purely
    /// local: posts on pages not yet fetched will not appear until they
    /// are paged in.
    pub fn set_search_query(&mut self, query: &str) {
        self.state.search_query = query.to_string();
        self.state.apply_filter();
        self.notify();
    }

    pub fn clear_search(&mut self) {
        self.set_search_query("");
    }

    pub fn create(&mut self, user_id: i64, title: &str, body: &str) -> Result<(), ApiError> {
        validate_text(title, body)?;
        let post = Post::new(user_id, title, body);
        let request = self.gateway.build_create(&post)?;
        let response = self.execute(request)?;
        let created = self.gateway.parse_create(response)?;
        debug!("created post {:?}, reloading", created.id);
        self.refresh()
    }

    pub fn update(&mut self, post: &Post, title: &str, body: &str) -> Result<(), ApiError> {
        validate_text(title, body)?;
        let edited = post.with_text(title, body);
        let request = self.gateway.build_update(&edited)?;
        let response = self.execute(request)?;
        self.gateway.parse_update(response)?;
        self.refresh()
    }

    /// Issue the DELETE regardless of whether the id is present locally;
    /// the server is the authority on what exists.
    pub fn delete(&mut self, id: i64) -> Result<(), ApiError> {
        let request = self.gateway.build_delete(id);
        let response = self.execute(request)?;
        self.gateway.parse_delete(response)?;
        debug!("deleted post {id}, reloading");
        self.refresh()
    }
}

fn validate_text(title: &str, body: &str) -> Result<(), ApiError> {
    if title.is_empty() {
        return Err(ApiError::Validation("title must not be empty".to_string()));
    }
    if body.is_empty() {
        return Err(ApiError::Validation("body must not be empty".to_string()));
    }
    Ok(())
}
