use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// A post as stored. The `id` is assigned here and never read by the client.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub profile: String,
    pub desc: String,
    pub exp: u32,
    pub techs: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPost {
    pub profile: String,
    pub desc: String,
    #[serde(default)]
    pub exp: u32,
    #[serde(default)]
    pub techs: Vec<String>,
}

impl Post {
    fn matches(&self, needle: &str) -> bool {
        self.profile.to_lowercase().contains(needle)
            || self.desc.to_lowercase().contains(needle)
            || self.techs.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// Insertion-ordered store.
pub type Db = Arc<RwLock<Vec<Post>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router pre-seeded with `posts`, in order.
pub fn app_with(posts: Vec<NewPost>) -> Router {
    let db: Db = Arc::new(RwLock::new(posts.into_iter().map(store).collect()));
    Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/{text}", get(search_posts))
        .route("/post", post(create_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn store(input: NewPost) -> Post {
    Post {
        id: Uuid::new_v4(),
        profile: input.profile,
        desc: input.desc,
        exp: input.exp,
        techs: input.techs,
    }
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    Json(db.read().await.clone())
}

async fn search_posts(State(db): State<Db>, Path(text): Path<String>) -> Json<Vec<Post>> {
    let needle = text.to_lowercase();
    let posts = db.read().await;
    let found: Vec<Post> = posts.iter().filter(|p| p.matches(&needle)).cloned().collect();
    tracing::debug!(text = %text, found = found.len(), "search");
    Json(found)
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<NewPost>,
) -> (StatusCode, Json<Post>) {
    let post = store(input);
    tracing::info!(id = %post.id, profile = %post.profile, "created post");
    db.write().await.push(post.clone());
    (StatusCode::OK, Json(post))
}
