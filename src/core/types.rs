//! Core data types for the Sonar engine.
//!
//! This module defines the data structures returned by the explorer
//! operations: regex search results, file contents and the project
//! tree. Q&A types live in `core::qa::model`.

use serde::{Deserialize, Serialize};

/// A regex search request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Regex applied to every line of every candidate file
    pub pattern: String,

    #[serde(default)]
    pub case_sensitive: bool,

    /// Optional regex applied to each candidate's relative path
    #[serde(default)]
    pub file_filter: Option<String>,

    /// Global match cap (must be > 0)
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Lines shown before and after each match
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,
}

fn default_max_results() -> usize {
    100
}

fn default_context_lines() -> usize {
    2
}

impl SearchQuery {
    /// Query with the default flags and limits
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            case_sensitive: false,
            file_filter: None,
            max_results: default_max_results(),
            context_lines: default_context_lines(),
        }
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn file_filter(mut self, filter: impl Into<String>) -> Self {
        self.file_filter = Some(filter.into());
        self
    }

    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn context_lines(mut self, context_lines: usize) -> Self {
        self.context_lines = context_lines;
        self
    }
}

/// Outcome of a regex search
///
/// `total_matches` always equals the number of `LineMatch` entries
/// across `matches` and never exceeds `max_results`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub pattern: String,
    pub case_sensitive: bool,
    pub file_filter: Option<String>,
    pub max_results: usize,
    pub total_matches: usize,
    pub files_searched: usize,
    pub files_matched: usize,

    /// True when matches beyond the result cap were left out
    pub truncated: bool,

    pub matches: Vec<FileMatch>,

    /// Set when the query was rejected before scanning
    pub error: Option<String>,
}

impl SearchResult {
    /// Empty result echoing the query flags
    pub fn empty(query: &SearchQuery) -> Self {
        Self {
            pattern: query.pattern.clone(),
            case_sensitive: query.case_sensitive,
            file_filter: query.file_filter.clone(),
            max_results: query.max_results,
            total_matches: 0,
            files_searched: 0,
            files_matched: 0,
            truncated: false,
            matches: Vec::new(),
            error: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// All matches found in one file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMatch {
    /// Path relative to the project root, `/`-separated
    pub file: String,
    pub matches: Vec<LineMatch>,
}

/// One matching line and its context window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineMatch {
    /// 1-based
    pub line_number: usize,
    pub content: String,
    pub context: Vec<ContextLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextLine {
    /// 1-based, always within the file
    pub line_number: usize,
    pub content: String,
    pub is_match: bool,
}

/// Full text of a single project file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileContent {
    /// The relative path as supplied by the caller
    pub file: String,
    pub content: String,
    pub lines: usize,
    /// Size on disk in bytes
    pub size: u64,
}

/// Node kind in the project tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    File,
    Directory,
    Truncated,
}

/// A node of the project tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectNode {
    pub name: String,

    #[serde(rename = "type")]
    pub node_type: NodeType,

    /// Directories only, sorted by name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ProjectNode>>,

    /// Files only, in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl ProjectNode {
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            node_type: NodeType::File,
            children: None,
            size: Some(size),
        }
    }

    pub fn directory(name: impl Into<String>, children: Vec<ProjectNode>) -> Self {
        Self {
            name: name.into(),
            node_type: NodeType::Directory,
            children: Some(children),
            size: None,
        }
    }

    /// Marker standing in for the contents below the depth limit
    pub fn truncated() -> Self {
        Self {
            name: "...".to_string(),
            node_type: NodeType::Truncated,
            children: None,
            size: None,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.node_type == NodeType::Directory
    }

    /// Child node by name (directories only)
    pub fn child(&self, name: &str) -> Option<&ProjectNode> {
        self.children
            .as_ref()
            .and_then(|children| children.iter().find(|c| c.name == name))
    }

    /// Number of file nodes in this subtree
    pub fn file_count(&self) -> usize {
        match self.node_type {
            NodeType::File => 1,
            NodeType::Truncated => 0,
            NodeType::Directory => self
                .children
                .as_ref()
                .map(|c| c.iter().map(ProjectNode::file_count).sum())
                .unwrap_or(0),
        }
    }
}
