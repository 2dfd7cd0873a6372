//! Sans-IO client core for the posts service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and keeps the state of the
//! single posts page: the creation form, the search box, the post feed, and
//! the page that coordinates them. The host executes every HTTP round-trip
//! and hands the outcome back, so the whole page is deterministic and
//! testable without a server.
//!
//! # Design
//! - `PostsClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Every issued request travels as an `Outgoing` tagged with a `Ticket`.
//!   A controller only applies the completion of the latest ticket it issued;
//!   older completions are dropped.
//! - Controllers report upward through returned events (`FormEvent`,
//!   `SearchEvent`) instead of shared mutable state. `Page` turns those into
//!   `UiState` transitions.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod dispatch;
pub mod draft;
pub mod error;
pub mod feed;
pub mod form;
pub mod http;
pub mod page;
pub mod render;
pub mod search;
pub mod types;
pub mod view;

pub use client::PostsClient;
pub use config::ClientConfig;
pub use dispatch::{Origin, Outgoing, Ticket};
pub use draft::{parse_exp, split_techs, PostDraft};
pub use error::{ApiError, PostsError};
pub use form::{DraftForm, Field, FormEvent};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use page::{Mode, Page, UiState};
pub use render::render_page;
pub use search::{SearchBox, SearchEvent};
pub use types::Post;
pub use view::PageView;
