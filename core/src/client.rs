//! Stateless HTTP request builder and response parser for the posts API.
//!
//! # Design
//! `PostsClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Every request carries the JSON content type. Any 2xx status counts as
//! success; the received order of posts is kept as is.

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ApiError, PostsError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Post;

/// Synchronous, stateless client for the posts API.
#[derive(Debug, Clone)]
pub struct PostsClient {
    base_url: String,
}

impl PostsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /posts`
    pub fn build_list_posts(&self) -> HttpRequest {
        self.get(format!("{}/posts", self.base_url))
    }

    /// `GET /posts/{text}` with `text` percent-encoded as one path segment.
    ///
    /// Callers never pass blank text; the search box refuses it first.
    pub fn build_search_posts(&self, text: &str) -> HttpRequest {
        self.get(format!(
            "{}/posts/{}",
            self.base_url,
            urlencoding::encode(text)
        ))
    }

    /// `POST /post` with the post as JSON.
    pub fn build_create_post(&self, post: &Post) -> Result<HttpRequest> {
        let body = serde_json::to_string(post)
            .map_err(|e| PostsError::CreateFailed(ApiError::Serialization(e.to_string())))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/post", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>> {
        decode(response).map_err(PostsError::FetchFailed)
    }

    pub fn parse_search_posts(&self, response: HttpResponse) -> Result<Vec<Post>> {
        decode(response).map_err(PostsError::FetchFailed)
    }

    pub fn parse_create_post(&self, response: HttpResponse) -> Result<Post> {
        decode(response).map_err(PostsError::CreateFailed)
    }

    fn get(&self, path: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: json_headers(),
            body: None,
        }
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> std::result::Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-2xx status codes to `ApiError::Status`.
fn check_status(response: &HttpResponse) -> std::result::Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
