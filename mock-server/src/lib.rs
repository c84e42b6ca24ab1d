//! JSONPlaceholder-style `/posts` backend for tests and manual runs.
//!
//! Faithful to the real mock service where it matters to clients: list
//! pagination via `_page`/`_limit`, sequential server-assigned ids, echoed
//! create/update responses, and a delete that answers 200 without checking
//! the id exists.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

#[derive(Deserialize)]
pub struct CreatePost {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

/// PUT payload. Clients send the full post including its id; the path id
/// wins, any id in the body is ignored.
#[derive(Deserialize)]
pub struct UpdatePost {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(rename = "_page", default = "default_page")]
    pub page: u64,
    #[serde(rename = "_limit", default = "default_limit")]
    pub limit: usize,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> usize {
    10
}

pub struct Store {
    posts: Vec<Post>,
    next_id: i64,
}

impl Store {
    fn seeded(posts: Vec<Post>) -> Self {
        let next_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self { posts, next_id }
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with_posts(Vec::new())
}

pub fn app_with_posts(posts: Vec<Post>) -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded(posts)));
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_posts(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Post>> {
    let store = db.read().await;
    let page = params.page.max(1);
    let skip = ((page - 1) as usize).saturating_mul(params.limit);
    let window = store
        .posts
        .iter()
        .skip(skip)
        .take(params.limit)
        .cloned()
        .collect();
    Json(window)
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<CreatePost>,
) -> (StatusCode, Json<Post>) {
    let mut store = db.write().await;
    let post = Post {
        id: store.next_id,
        user_id: input.user_id,
        title: input.title,
        body: input.body,
    };
    store.next_id += 1;
    store.posts.push(post.clone());
    (StatusCode::CREATED, Json(post))
}

async fn get_post(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Post>, StatusCode> {
    let store = db.read().await;
    store
        .posts
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_post(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdatePost>,
) -> Result<Json<Post>, StatusCode> {
    let mut store = db.write().await;
    let post = store
        .posts
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    post.user_id = input.user_id;
    post.title = input.title;
    post.body = input.body;
    Ok(Json(post.clone()))
}

/// The real mock backend validates nothing: deleting an unknown id still
/// answers 200.
async fn delete_post(State(db): State<Db>, Path(id): Path<i64>) -> (StatusCode, Json<Value>) {
    let mut store = db.write().await;
    store.posts.retain(|p| p.id != id);
    (StatusCode::OK, Json(json!({})))
}
