//! Sonar CLI - Command-line interface for Sonar code search
//!
//! A direct command-line interface for Sonar's regex search and knowledge base.
//! Use this for scripting, automation, or manual operations without an MCP client.
//!
//! # Examples
//!
//! ```bash
//! # Search for code
//! sonar search-code 'def \w+_song' --file-filter '\.py$'
//!
//! # Read a file
//! sonar read-file backend/app/main.py
//!
//! # Ask the knowledge base
//! sonar search-qa authentication
//!
//! # Show configuration
//! sonar show-config
//! ```

use clap::Parser;
use sonar::cli::output::print_error;
use sonar::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    // Quiet by default; RUST_LOG=sonar=debug shows skipped files
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sonar=warn"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
