//! Sonar - regex code search and documentation Q&A
//!
//! A read-only engine over a project source tree: regex search with
//! context windows, path-safe file retrieval, bounded directory tree
//! introspection and a categorized Q&A index built from the project
//! documentation.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - explorer (walker, decoding, search, path resolution, tree)
//!   - qa (documentation model, narrative extraction, index, handle)
//!   - services (unified service container)
//!
//! - **mcp**: MCP adapter (depends on core)
//!   - server, tools, protocol
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - commands, output
//!
//! # Key Features
//!
//! - Scan-order results with a hard global match cap
//! - Linear-time regex engine (no catastrophic backtracking)
//! - Path traversal and symlink escapes rejected before reading
//! - Immutable Q&A index with atomic reload

// Core domain logic (protocol-agnostic)
pub mod core;

// MCP (Model Context Protocol) adapter
pub mod mcp;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{Result, SonarError};
pub use core::services::Services;
pub use core::types::*;
