//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (MCP, CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Search, file and tree data structures
//! - **xdg**: XDG directory handling
//! - **explorer**: File walking, regex search, path resolution, tree
//! - **qa**: Q&A index assembly and queries
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod explorer;
pub mod qa;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, SonarError};
pub use services::Services;
