//! The canonical post collection.
//!
//! Fetched once on mount and again on every manual refresh. Each successful
//! fetch replaces the whole collection; a failed one leaves it untouched.

use crate::client::PostsClient;
use crate::dispatch::{Origin, Outgoing, Sequencer, Ticket};
use crate::error::{ApiError, PostsError};
use crate::http::HttpResponse;
use crate::types::Post;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch posts. Make sure your backend is running.";

#[derive(Debug)]
pub struct Feed {
    posts: Vec<Post>,
    error: Option<String>,
    mounted: bool,
    seq: Sequencer,
}

impl Default for Feed {
    fn default() -> Self {
        Self::new()
    }
}

impl Feed {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            error: None,
            mounted: false,
            seq: Sequencer::new(Origin::Feed),
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn loading(&self) -> bool {
        self.seq.in_flight()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// First fetch. Only the first call produces a request.
    pub fn mount(&mut self, client: &PostsClient) -> Option<Outgoing> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        self.refresh(client)
    }

    /// Refetch everything. Refused while a fetch is already loading.
    pub fn refresh(&mut self, client: &PostsClient) -> Option<Outgoing> {
        if self.loading() {
            return None;
        }
        Some(self.reload(client))
    }

    /// Refetch even if a fetch is loading; the older one becomes stale.
    pub fn reload(&mut self, client: &PostsClient) -> Outgoing {
        self.error = None;
        self.seq.issue(client.build_list_posts())
    }

    /// Apply a list completion. Returns true if it was the current one.
    pub fn complete(
        &mut self,
        client: &PostsClient,
        ticket: Ticket,
        result: Result<HttpResponse, ApiError>,
    ) -> bool {
        if !self.seq.accept(ticket) {
            return false;
        }
        let outcome = result
            .map_err(PostsError::FetchFailed)
            .and_then(|response| client.parse_list_posts(response));
        match outcome {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "fetched posts");
                self.posts = posts;
            }
            Err(err) => {
                tracing::error!(error = %err, "error fetching posts");
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PostsClient {
        PostsClient::new("http://localhost:3001")
    }

    const ONE_POST: &str = r#"[{"profile":"A","desc":"d","exp":2,"techs":["x"]}]"#;

    #[test]
    fn mount_fetches_once() {
        let mut feed = Feed::new();
        let outgoing = feed.mount(&client()).unwrap();
        assert_eq!(outgoing.request.path, "http://localhost:3001/posts");
        assert!(feed.loading());
        feed.complete(&client(), outgoing.ticket, Ok(HttpResponse::new(200, "[]")));
        assert!(feed.mount(&client()).is_none());
    }

    #[test]
    fn refresh_is_refused_while_loading() {
        let mut feed = Feed::new();
        let outgoing = feed.mount(&client()).unwrap();
        assert!(feed.refresh(&client()).is_none());
        feed.complete(&client(), outgoing.ticket, Ok(HttpResponse::new(200, ONE_POST)));
        assert!(feed.refresh(&client()).is_some());
    }

    #[test]
    fn success_replaces_collection() {
        let mut feed = Feed::new();
        let outgoing = feed.mount(&client()).unwrap();
        assert!(feed.complete(&client(), outgoing.ticket, Ok(HttpResponse::new(200, ONE_POST))));
        assert_eq!(feed.posts().len(), 1);

        let outgoing = feed.refresh(&client()).unwrap();
        feed.complete(&client(), outgoing.ticket, Ok(HttpResponse::new(200, "[]")));
        assert!(feed.posts().is_empty());
    }

    #[test]
    fn failure_keeps_previous_collection() {
        let mut feed = Feed::new();
        let outgoing = feed.mount(&client()).unwrap();
        feed.complete(&client(), outgoing.ticket, Ok(HttpResponse::new(200, ONE_POST)));

        let outgoing = feed.refresh(&client()).unwrap();
        feed.complete(
            &client(),
            outgoing.ticket,
            Err(ApiError::Transport("connection refused".to_string())),
        );
        assert_eq!(feed.error_message(), Some(FETCH_FAILED_MESSAGE));
        assert_eq!(feed.posts().len(), 1);
        assert!(!feed.loading());
    }

    #[test]
    fn reload_supersedes_fetch_in_flight() {
        let mut feed = Feed::new();
        let first = feed.mount(&client()).unwrap();
        let second = feed.reload(&client());
        assert!(!feed.complete(&client(), first.ticket, Ok(HttpResponse::new(200, ONE_POST))));
        assert!(feed.posts().is_empty());
        assert!(feed.complete(&client(), second.ticket, Ok(HttpResponse::new(200, ONE_POST))));
        assert_eq!(feed.posts().len(), 1);
    }

    #[test]
    fn refresh_clears_previous_error() {
        let mut feed = Feed::new();
        let outgoing = feed.mount(&client()).unwrap();
        feed.complete(&client(), outgoing.ticket, Ok(HttpResponse::new(500, "")));
        assert!(feed.error_message().is_some());
        feed.refresh(&client()).unwrap();
        assert!(feed.error_message().is_none());
    }
}
