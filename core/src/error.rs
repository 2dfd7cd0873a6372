//! Error types for the posts client.
//!
//! # Design
//! Two layers. `ApiError` says what went wrong with one HTTP exchange.
//! `PostsError` says which user action failed: a local validation problem
//! that never reached the network, a failed read (list or search), or a
//! failed create. Controllers turn a `PostsError` into the one message they
//! show; none of these are fatal.

use thiserror::Error;

/// What went wrong with a single request/response exchange.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The host could not complete the round-trip (connection refused, DNS,
    /// reset, ...).
    #[error("transport failed: {0}")]
    Transport(String),
}

/// Errors surfaced by the posts operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostsError {
    /// Rejected locally before any request was built.
    #[error("{0}")]
    Validation(String),

    /// Listing or searching posts failed.
    #[error("fetch failed: {0}")]
    FetchFailed(#[source] ApiError),

    /// Creating a post failed.
    #[error("create failed: {0}")]
    CreateFailed(#[source] ApiError),
}

pub type Result<T> = std::result::Result<T, PostsError>;
