//! Source tree exploration: regex search, file retrieval and tree
//! introspection over the live filesystem.
//!
//! Every call re-reads the disk; nothing is cached between calls.

pub mod decode;
pub mod matcher;
pub mod resolver;
pub mod tree;
pub mod walker;

pub use decode::{Decoded, Decoder, SkipReason};
pub use matcher::SearchOrchestrator;
pub use resolver::PathResolver;
pub use tree::TreeBuilder;
pub use walker::{Candidate, FileWalker};

use std::path::Path;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::types::{FileContent, ProjectNode, SearchQuery, SearchResult};

/// Read-only view of one project root
#[derive(Debug, Clone)]
pub struct Explorer {
    resolver: PathResolver,
    orchestrator: SearchOrchestrator,
    tree: TreeBuilder,
}

impl Explorer {
    pub fn new(config: &Config) -> Result<Self> {
        let walker = FileWalker::new(&config.walker)?;

        Ok(Self {
            resolver: PathResolver::new(&config.project.root),
            orchestrator: SearchOrchestrator::new(walker, &config.search),
            tree: TreeBuilder::new(&config.walker, &config.tree),
        })
    }

    pub fn root(&self) -> &Path {
        self.resolver.root()
    }

    pub fn search(&self, query: &SearchQuery) -> SearchResult {
        self.orchestrator.search(self.root(), query)
    }

    pub fn get_file_content(&self, relative: &str) -> Result<FileContent> {
        self.resolver.get_file_content(relative)
    }

    /// Tree with the given depth, or the configured default
    pub fn get_project_structure(&self, max_depth: Option<usize>) -> ProjectNode {
        let depth = max_depth.unwrap_or_else(|| self.tree.default_max_depth());
        self.tree.build(self.root(), depth)
    }
}
