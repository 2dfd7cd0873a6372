//! Text search box.

use crate::client::PostsClient;
use crate::dispatch::{Origin, Outgoing, Sequencer, Ticket};
use crate::error::{ApiError, PostsError};
use crate::http::HttpResponse;
use crate::types::Post;

pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Make sure your backend is running.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// A search came back, possibly empty. `query` is the trimmed text that
    /// was sent, not whatever the box holds now.
    Results { results: Vec<Post>, query: String },
    /// The user cleared the box.
    Cleared,
}

#[derive(Debug)]
pub struct SearchBox {
    query: String,
    sent_query: String,
    error: Option<String>,
    seq: Sequencer,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            sent_query: String::new(),
            error: None,
            seq: Sequencer::new(Origin::Search),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn submitting(&self) -> bool {
        self.seq.in_flight()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Build the search request. Blank queries are refused without touching
    /// any state.
    pub fn submit(&mut self, client: &PostsClient) -> Option<Outgoing> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.error = None;
        self.sent_query = trimmed.to_string();
        let request = client.build_search_posts(trimmed);
        tracing::debug!(query = %self.sent_query, "searching posts");
        Some(self.seq.issue(request))
    }

    pub fn complete(
        &mut self,
        client: &PostsClient,
        ticket: Ticket,
        result: Result<HttpResponse, ApiError>,
    ) -> Option<SearchEvent> {
        if !self.seq.accept(ticket) {
            return None;
        }
        let outcome = result
            .map_err(PostsError::FetchFailed)
            .and_then(|response| client.parse_search_posts(response));
        match outcome {
            Ok(results) => Some(SearchEvent::Results {
                results,
                query: std::mem::take(&mut self.sent_query),
            }),
            Err(err) => {
                tracing::error!(error = %err, query = %self.sent_query, "error searching posts");
                self.error = Some(SEARCH_FAILED_MESSAGE.to_string());
                None
            }
        }
    }

    /// Reset the box and drop any search still in flight.
    pub fn clear(&mut self) -> SearchEvent {
        self.query.clear();
        self.sent_query.clear();
        self.error = None;
        self.seq.abandon();
        SearchEvent::Cleared
    }
}
