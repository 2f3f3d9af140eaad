//! CLI adapter for Sonar
//!
//! Provides command-line access to Sonar's code search and knowledge base.
//! This module is parallel to `mcp/`: both depend on `core/`. The CLI only
//! borrows the MCP tool list and protocol version for `get-server-info`.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      mcp/        |      |      cli/        |
//! | (stdio adapter)  |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sonar - regex code search and project Q&A
///
/// Searches the project source tree with regular expressions, reads files
/// and answers questions from the project documentation.
#[derive(Parser, Debug)]
#[command(name = "sonar")]
#[command(version)]
#[command(about = "Regex code search and project Q&A", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Project root (overrides config and SONAR_PROJECT_ROOT)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
///
/// Command names match MCP tool names (underscores become hyphens).
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the source tree with a regular expression
    #[command(name = "search-code")]
    SearchCode(commands::SearchArgs),

    /// Print a file by its path relative to the project root
    #[command(name = "read-file")]
    ReadFile(commands::ReadFileArgs),

    /// Show the project directory tree
    #[command(name = "get-project-structure")]
    GetProjectStructure(commands::StructureArgs),

    /// List knowledge-base entries by category
    #[command(name = "list-qa")]
    ListQa(commands::qa::ListArgs),

    /// Search the knowledge base
    #[command(name = "search-qa")]
    SearchQa(commands::qa::SearchArgs),

    /// Describe a documented backend service
    #[command(name = "get-service-info")]
    GetServiceInfo(commands::ServiceArgs),

    /// Summarize the technology stack, layout and services
    #[command(name = "get-codebase-overview")]
    GetCodebaseOverview(commands::OverviewArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Show version and server information
    #[command(name = "get-server-info")]
    GetServerInfo(commands::InfoArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  sonar completions bash > ~/.local/share/bash-completion/completions/sonar
    ///   zsh:   sonar completions zsh > ~/.zfunc/_sonar
    ///   fish:  sonar completions fish > ~/.config/fish/completions/sonar.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Load configuration
    let mut config = Config::load()?;
    if let Some(root) = cli.root {
        config.project.root = root;
        config.validate()?;
    }

    // Create services
    let services = Arc::new(Services::new(config)?);

    // Execute command
    match cli.command {
        Commands::SearchCode(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::ReadFile(args) => {
            commands::read_file::execute(args, &services, cli.format).await
        }
        Commands::GetProjectStructure(args) => {
            commands::structure::execute(args, &services, cli.format).await
        }
        Commands::ListQa(args) => commands::qa::execute_list(args, &services, cli.format).await,
        Commands::SearchQa(args) => {
            commands::qa::execute_search(args, &services, cli.format).await
        }
        Commands::GetServiceInfo(args) => {
            commands::service::execute(args, &services, cli.format).await
        }
        Commands::GetCodebaseOverview(args) => {
            commands::overview::execute(args, &services, cli.format).await
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::GetServerInfo(args) => commands::info::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
