//! Plain-text rendering of a `PageView`.
//!
//! Sections top to bottom: search box, search banner, feed, creation form.
//! Output is plain text with no escape codes so it can be printed to any
//! terminal or compared in tests.

use std::fmt;

use crate::view::{Card, FeedView, FormView, PageView, SearchView, LOADING_MESSAGE, NO_TECHS_PLACEHOLDER};

const TITLE: &str = "Posts Management System";

pub fn render_page(view: &PageView) -> String {
    view.to_string()
}

/// Just the feed section, for one-shot output.
pub fn render_feed_section(feed: &FeedView) -> String {
    feed.to_string()
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {TITLE} ==")?;
        writeln!(f)?;
        write!(f, "{}", self.search)?;
        if let Some(query) = &self.banner {
            writeln!(f, "Showing results for: \"{query}\"  (`all` to view all posts)")?;
        }
        writeln!(f)?;
        write!(f, "{}", self.feed)?;
        writeln!(f)?;
        write!(f, "{}", self.form)
    }
}

impl fmt::Display for SearchView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search Posts")?;
        if let Some(error) = &self.error {
            writeln!(f, "  ! {error}")?;
        }
        let status = if self.submitting { "  (searching...)" } else { "" };
        writeln!(f, "  query: {}{status}", self.query)
    }
}

impl fmt::Display for FeedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedView::Loading => writeln!(f, "{LOADING_MESSAGE}"),
            FeedView::Failed(error) => writeln!(f, "! {error}"),
            FeedView::Loaded {
                title,
                cards,
                empty_message,
            } => {
                writeln!(f, "{title}  [refresh]")?;
                if let Some(message) = empty_message {
                    writeln!(f, "  {message}")?;
                }
                for card in cards {
                    write!(f, "{card}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  #{} {}  ({} years exp)", self.position + 1, self.profile, self.exp)?;
        writeln!(f, "     {}", self.desc)?;
        if self.techs.is_empty() {
            writeln!(f, "     {NO_TECHS_PLACEHOLDER}")
        } else {
            let tags: Vec<String> = self.techs.iter().map(|t| format!("[{t}]")).collect();
            writeln!(f, "     {}", tags.join(" "))
        }
    }
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Create New Post")?;
        if let Some(error) = &self.error {
            writeln!(f, "  ! {error}")?;
        }
        if let Some(success) = self.success {
            writeln!(f, "  + {success}")?;
        }
        for (name, value) in &self.fields {
            writeln!(f, "  {name:<8} {value}")?;
        }
        if self.submitting {
            writeln!(f, "  (creating...)")?;
        }
        Ok(())
    }
}
