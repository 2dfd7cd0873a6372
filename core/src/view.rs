//! Render-ready snapshot of the page.
//!
//! `PageView` is computed from a `Page` on demand and holds only what the
//! renderer prints: text, counts and flags. The feed section picks the
//! collection by mode here, so renderers never look at `UiState`.

use crate::form::{Field, SUCCESS_MESSAGE};
use crate::page::Page;
use crate::types::Post;

pub const LOADING_MESSAGE: &str = "Loading posts...";
pub const EMPTY_FEED_MESSAGE: &str = "No posts available. Create one below!";
pub const EMPTY_SEARCH_MESSAGE: &str = "No posts found for your search.";
pub const NO_TECHS_PLACEHOLDER: &str = "No technologies listed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub search: SearchView,
    /// The query being shown, while in search mode.
    pub banner: Option<String>,
    pub feed: FeedView,
    pub form: FormView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    pub query: String,
    pub submitting: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedView {
    Loading,
    Failed(String),
    Loaded {
        title: String,
        cards: Vec<Card>,
        /// Set when `cards` is empty.
        empty_message: Option<&'static str>,
    },
}

/// One post as displayed. Cards are identified by their position in the
/// displayed collection; posts carry no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub position: usize,
    pub profile: String,
    pub exp: u32,
    pub desc: String,
    pub techs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub fields: Vec<(&'static str, String)>,
    pub submitting: bool,
    pub error: Option<String>,
    pub success: Option<&'static str>,
}

impl PageView {
    pub fn from_page(page: &Page) -> Self {
        let ui = page.ui();
        let search = page.search();
        let form = page.form();

        Self {
            search: SearchView {
                query: search.query().to_string(),
                submitting: search.submitting(),
                error: search.error_message().map(str::to_string),
            },
            banner: ui.is_searching().then(|| ui.query().to_string()),
            feed: feed_view(page),
            form: FormView {
                fields: Field::ALL
                    .iter()
                    .map(|&f| (f.name(), form.field(f).to_string()))
                    .collect(),
                submitting: form.submitting(),
                error: form.error_message().map(str::to_string),
                success: form.just_succeeded().then_some(SUCCESS_MESSAGE),
            },
        }
    }
}

fn feed_view(page: &Page) -> FeedView {
    let feed = page.feed();
    if feed.loading() {
        return FeedView::Loading;
    }
    if let Some(error) = feed.error_message() {
        return FeedView::Failed(error.to_string());
    }

    let ui = page.ui();
    let (title, posts, empty) = if ui.is_searching() {
        ("Search Results", ui.results(), EMPTY_SEARCH_MESSAGE)
    } else {
        ("All Posts", feed.posts(), EMPTY_FEED_MESSAGE)
    };

    FeedView::Loaded {
        title: format!("{title} ({})", posts.len()),
        cards: posts.iter().enumerate().map(card).collect(),
        empty_message: posts.is_empty().then_some(empty),
    }
}

fn card((position, post): (usize, &Post)) -> Card {
    Card {
        position,
        profile: post.profile.clone(),
        exp: post.exp,
        desc: post.desc.clone(),
        techs: post.techs.clone(),
    }
}
