//! Terminal host for the posts page.
//!
//! The core crate never touches the network: it hands out requests and takes
//! back their outcomes. This binary is the host. It parses arguments, sets up
//! logging on stderr, executes requests with ureq and prints the rendered
//! page to stdout. Without a subcommand it runs the interactive page; `list`,
//! `search` and `create` run one action and exit.

mod args;
mod command;
mod session;
#[cfg(test)]
mod test_support;
mod transport;

use clap::Parser;
use posts_core::PostsClient;
use tracing_subscriber::EnvFilter;

use crate::args::Cli;
use crate::transport::Transport;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let client = PostsClient::new(&args::resolve_base_url(cli.base_url));
    tracing::info!(base_url = client.base_url(), "using backend");
    let transport = Transport::new();

    match cli.command {
        None => session::run_interactive(client, transport),
        Some(command) => session::run_once(client, transport, command),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}
