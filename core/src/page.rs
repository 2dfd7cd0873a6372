//! The page: UI mode plus the three controllers.
//!
//! `UiState` is an immutable value. It only changes by being replaced with
//! the result of one of its named transitions. `Page` owns it together with
//! the form, the search box and the feed, routes each completion back to the
//! controller that issued it by ticket origin, and turns the events they
//! report into transitions.

use std::time::Instant;

use crate::client::PostsClient;
use crate::dispatch::{Origin, Outgoing, Ticket};
use crate::error::ApiError;
use crate::feed::Feed;
use crate::form::{DraftForm, Field, FormEvent};
use crate::http::HttpResponse;
use crate::search::{SearchBox, SearchEvent};
use crate::types::Post;
use crate::view::PageView;

/// Which collection the feed shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Browsing,
    Searching,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    mode: Mode,
    query: String,
    results: Vec<Post>,
}

impl UiState {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Post] {
        &self.results
    }

    pub fn is_searching(&self) -> bool {
        self.mode == Mode::Searching
    }

    /// A search answered, even with nothing.
    #[must_use]
    pub fn with_search_results(self, results: Vec<Post>, query: String) -> Self {
        Self {
            mode: Mode::Searching,
            query,
            results,
        }
    }

    /// Back to browsing with no query or results.
    #[must_use]
    pub fn cleared(self) -> Self {
        Self::default()
    }

    /// A created post would stay hidden under a stale search, so leave it.
    #[must_use]
    pub fn after_post_created(self) -> Self {
        if self.is_searching() {
            self.cleared()
        } else {
            self
        }
    }
}

#[derive(Debug)]
pub struct Page {
    client: PostsClient,
    ui: UiState,
    form: DraftForm,
    search: SearchBox,
    feed: Feed,
}

impl Page {
    pub fn new(client: PostsClient) -> Self {
        Self {
            client,
            ui: UiState::default(),
            form: DraftForm::new(),
            search: SearchBox::new(),
            feed: Feed::new(),
        }
    }

    pub fn client(&self) -> &PostsClient {
        &self.client
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn form(&self) -> &DraftForm {
        &self.form
    }

    pub fn search(&self) -> &SearchBox {
        &self.search
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    /// True while any controller still waits on a request it issued.
    pub fn busy(&self) -> bool {
        self.feed.loading() || self.search.submitting() || self.form.submitting()
    }

    /// Initial load of the canonical list.
    pub fn mount(&mut self) -> Option<Outgoing> {
        self.feed.mount(&self.client)
    }

    pub fn refresh(&mut self) -> Option<Outgoing> {
        self.feed.refresh(&self.client)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.search.set_query(query);
    }

    pub fn submit_search(&mut self) -> Option<Outgoing> {
        self.search.submit(&self.client)
    }

    /// The search box's clear button: resets the box and leaves search mode.
    pub fn clear_search(&mut self) {
        let event = self.search.clear();
        self.apply_search_event(event);
    }

    /// The "view all posts" link: leaves search mode, keeps the box text.
    pub fn show_all(&mut self) {
        self.handle_clear_search();
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    pub fn submit_post(&mut self) -> Option<Outgoing> {
        self.form.submit(&self.client)
    }

    /// Hand a finished request back to whoever issued it.
    ///
    /// May return a follow-up request for the host to execute: a successful
    /// create reloads the canonical list.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<HttpResponse, ApiError>,
        now: Instant,
    ) -> Option<Outgoing> {
        match ticket.origin() {
            Origin::Feed => {
                self.feed.complete(&self.client, ticket, result);
                None
            }
            Origin::Search => {
                if let Some(event) = self.search.complete(&self.client, ticket, result) {
                    self.apply_search_event(event);
                }
                None
            }
            Origin::Create => match self.form.complete(&self.client, ticket, result, now) {
                Some(FormEvent::Created(_)) => Some(self.handle_post_created()),
                None => None,
            },
        }
    }

    /// Advance timers. Returns true if the view changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.form.tick(now)
    }

    pub fn view(&self) -> PageView {
        PageView::from_page(self)
    }

    fn apply_search_event(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::Results { results, query } => self.handle_search_results(results, query),
            SearchEvent::Cleared => self.handle_clear_search(),
        }
    }

    fn handle_search_results(&mut self, results: Vec<Post>, query: String) {
        tracing::debug!(count = results.len(), query = %query, "showing search results");
        self.ui = std::mem::take(&mut self.ui).with_search_results(results, query);
    }

    fn handle_clear_search(&mut self) {
        self.ui = std::mem::take(&mut self.ui).cleared();
    }

    fn handle_post_created(&mut self) -> Outgoing {
        self.ui = std::mem::take(&mut self.ui).after_post_created();
        self.feed.reload(&self.client)
    }
}
