use clap::{Parser, Subcommand};
use posts_core::ClientConfig;

/// A terminal has no origin to be relative to, so an empty base falls back here.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

#[derive(Debug, Parser)]
#[command(name = "posts", version, about = "Browse, search and create posts")]
pub struct Cli {
    /// Backend origin, e.g. http://localhost:3001
    #[arg(long, env = "POSTS_API_BASE", global = true)]
    pub base_url: Option<String>,

    /// Without a subcommand, start the interactive page.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all posts
    List,
    /// Search posts by text
    Search {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Create a post
    Create {
        #[arg(long)]
        profile: String,
        #[arg(long)]
        desc: String,
        /// Years of experience
        #[arg(long, default_value = "")]
        exp: String,
        /// Comma separated, e.g. "rust, tokio"
        #[arg(long, default_value = "")]
        techs: String,
    },
}

pub fn resolve_base_url(arg: Option<String>) -> String {
    let config = ClientConfig::from_value(arg);
    if config.is_relative() {
        tracing::debug!(base_url = DEFAULT_BASE_URL, "no base url configured");
        return DEFAULT_BASE_URL.to_string();
    }
    config.base_url
}
