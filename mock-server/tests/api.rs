use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, NewPost, Post};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes: bytes::Bytes = response.into_body().collect().await.unwrap().to_bytes();
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

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn seed() -> Vec<NewPost> {
    vec![
        NewPost {
            profile: "Java Developer".to_string(),
            desc: "Spring Boot services".to_string(),
            exp: 3,
            techs: vec!["java".to_string(), "spring".to_string()],
        },
        NewPost {
            profile: "Rust Engineer".to_string(),
            desc: "Async networking".to_string(),
            exp: 5,
            techs: vec!["rust".to_string(), "tokio".to_string()],
        },
    ]
}

// --- list ---

#[tokio::test]
async fn list_posts_empty() {
    let resp = app().oneshot(get("/posts")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    assert!(posts.is_empty());
}

#[tokio::test]
async fn list_posts_keeps_insertion_order() {
    let resp = app_with(seed()).oneshot(get("/posts")).await.unwrap();

    let posts: Vec<Post> = body_json(resp).await;
    let profiles: Vec<&str> = posts.iter().map(|p| p.profile.as_str()).collect();
    assert_eq!(profiles, ["Java Developer", "Rust Engineer"]);
}

// --- search ---

#[tokio::test]
async fn search_matches_techs() {
    let resp = app_with(seed()).oneshot(get("/posts/tokio")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].profile, "Rust Engineer");
}

#[tokio::test]
async fn search_decodes_percent_encoded_text() {
    let resp = app_with(seed())
        .oneshot(get("/posts/spring%20boot"))
        .await
        .unwrap();

    let posts: Vec<Post> = body_json(resp).await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].profile, "Java Developer");
}

#[tokio::test]
async fn search_without_match_is_empty() {
    let resp = app_with(seed()).oneshot(get("/posts/cobol")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    assert!(posts.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_post_returns_stored_post() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/post",
            r#"{"profile":"QA","desc":"Testing","exp":1,"techs":["selenium"]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let post: Post = body_json(resp).await;
    assert_eq!(post.profile, "QA");
    assert_eq!(post.exp, 1);
    assert_eq!(post.techs, vec!["selenium".to_string()]);
}

#[tokio::test]
async fn create_post_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/post", r#"{"not_profile":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- create then read back ---

#[tokio::test]
async fn create_then_list_and_search() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/post",
            r#"{"profile":"Frontend","desc":"React work","techs":["react"]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Post = body_json(resp).await;
    assert_eq!(created.exp, 0);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/posts"))
        .await
        .unwrap();
    let posts: Vec<Post> = body_json(resp).await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, created.id);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/posts/REACT"))
        .await
        .unwrap();
    let posts: Vec<Post> = body_json(resp).await;
    assert_eq!(posts.len(), 1);
}
