use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with_posts, Post};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn sample_posts(count: usize) -> Vec<Post> {
    (1..=count as i64)
        .map(|i| Post {
            id: i,
            user_id: (i - 1) / 10 + 1,
            title: format!("Post {i}"),
            body: format!("Body of post {i}"),
        })
        .collect()
}

// --- list ---

#[tokio::test]
async fn list_posts_empty() {
    let resp = app().oneshot(get_request("/posts")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    assert!(posts.is_empty());
}

#[tokio::test]
async fn list_defaults_to_page_1_limit_10() {
    let app = app_with_posts(sample_posts(15));
    let resp = app.oneshot(get_request("/posts")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    assert_eq!(posts.len(), 10);
    assert_eq!(posts[0].id, 1);
    assert_eq!(posts[9].id, 10);
}

#[tokio::test]
async fn list_returns_the_requested_window() {
    let app = app_with_posts(sample_posts(15));
    let resp = app
        .oneshot(get_request("/posts?_page=2&_limit=5"))
        .await
        .unwrap();

    let posts: Vec<Post> = body_json(resp).await;
    assert_eq!(posts.len(), 5);
    assert_eq!(posts[0].id, 6);
    assert_eq!(posts[4].id, 10);
}

#[tokio::test]
async fn list_short_final_page() {
    let app = app_with_posts(sample_posts(14));
    let resp = app
        .oneshot(get_request("/posts?_page=2&_limit=10"))
        .await
        .unwrap();

    let posts: Vec<Post> = body_json(resp).await;
    assert_eq!(posts.len(), 4);
    assert_eq!(posts[0].id, 11);
}

#[tokio::test]
async fn list_past_the_end_is_empty() {
    let app = app_with_posts(sample_posts(5));
    let resp = app
        .oneshot(get_request("/posts?_page=3&_limit=10"))
        .await
        .unwrap();

    let posts: Vec<Post> = body_json(resp).await;
    assert!(posts.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_post_assigns_the_next_id() {
    let app = app_with_posts(sample_posts(3));
    let resp = app
        .oneshot(json_request(
            "POST",
            "/posts",
            r#"{"userId":1,"title":"New","body":"Fresh"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let post: Post = body_json(resp).await;
    assert_eq!(post.id, 4);
    assert_eq!(post.title, "New");
    assert_eq!(post.body, "Fresh");
}

#[tokio::test]
async fn create_post_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/posts", r#"{"title":"no user"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_post_by_id() {
    let app = app_with_posts(sample_posts(3));
    let resp = app.oneshot(get_request("/posts/2")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let post: Post = body_json(resp).await;
    assert_eq!(post.id, 2);
}

#[tokio::test]
async fn get_post_not_found() {
    let resp = app().oneshot(get_request("/posts/42")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- update ---

#[tokio::test]
async fn update_post_echoes_the_new_fields() {
    let app = app_with_posts(sample_posts(3));
    let resp = app
        .oneshot(json_request(
            "PUT",
            "/posts/2",
            r#"{"id":2,"userId":1,"title":"Edited","body":"Changed"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let post: Post = body_json(resp).await;
    assert_eq!(post.id, 2);
    assert_eq!(post.title, "Edited");
    assert_eq!(post.body, "Changed");
}

#[tokio::test]
async fn update_post_not_found() {
    let resp = app()
        .oneshot(json_request(
            "PUT",
            "/posts/9",
            r#"{"userId":1,"title":"t","body":"b"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_post_removes_it() {
    use tower::Service;

    let mut app = app_with_posts(sample_posts(3)).into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri("/posts/2")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/posts"))
        .await
        .unwrap();
    let posts: Vec<Post> = body_json(resp).await;
    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p.id != 2));
}

#[tokio::test]
async fn delete_unknown_id_still_answers_200() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/posts/42")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({}));
}
