//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.
//! Command names match MCP tool names (underscores become hyphens in CLI).

pub mod completions;
pub mod config;
pub mod info;
pub mod overview;
pub mod qa;
pub mod read_file;
pub mod search;
pub mod service;
pub mod structure;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use info::InfoArgs;
pub use overview::OverviewArgs;
pub use read_file::ReadFileArgs;
pub use search::SearchArgs;
pub use service::ServiceArgs;
pub use structure::StructureArgs;
