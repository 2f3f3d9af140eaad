//! Bounded-depth directory tree introspection.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::core::config::{TreeConfig, WalkerConfig};
use crate::core::types::ProjectNode;

/// Builds `ProjectNode` trees under the project root
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    excluded_dirs: HashSet<String>,
    visible_dotfiles: HashSet<String>,
    default_max_depth: usize,
    max_depth_cap: usize,
}

impl TreeBuilder {
    pub fn new(walker: &WalkerConfig, tree: &TreeConfig) -> Self {
        Self {
            excluded_dirs: walker.excluded_dirs.iter().cloned().collect(),
            visible_dotfiles: tree.visible_dotfiles.iter().cloned().collect(),
            default_max_depth: tree.default_max_depth,
            max_depth_cap: tree.max_depth_cap,
        }
    }

    pub fn default_max_depth(&self) -> usize {
        self.default_max_depth
    }

    /// Tree rooted at `root` (depth 0)
    ///
    /// A directory at `depth == max_depth` keeps its node, but its
    /// contents collapse into a single `truncated` marker.
    pub fn build(&self, root: &Path, max_depth: usize) -> ProjectNode {
        let max_depth = max_depth.min(self.max_depth_cap);
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());

        ProjectNode::directory(name, self.children(root, 0, max_depth))
    }

    fn children(&self, dir: &Path, depth: usize, max_depth: usize) -> Vec<ProjectNode> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Cannot list {:?}: {}", dir, e);
                return Vec::new();
            }
        };

        // Symlinks are never followed, matching the search walk
        let mut visible: Vec<_> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let file_type = entry.file_type().ok()?;
                if file_type.is_symlink() {
                    tracing::debug!("Skipping symlink {:?}", entry.path());
                    return None;
                }
                Some((entry, file_type))
            })
            .filter(|(entry, _)| self.is_visible(&entry.file_name().to_string_lossy()))
            .collect();

        if visible.is_empty() {
            return Vec::new();
        }

        if depth >= max_depth {
            return vec![ProjectNode::truncated()];
        }

        visible.sort_by_key(|(entry, _)| entry.file_name());

        visible
            .into_iter()
            .map(|(entry, file_type)| {
                let name = entry.file_name().to_string_lossy().into_owned();
                if file_type.is_dir() {
                    ProjectNode::directory(name, self.children(&entry.path(), depth + 1, max_depth))
                } else {
                    let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
                    ProjectNode::file(name, size)
                }
            })
            .collect()
    }

    fn is_visible(&self, name: &str) -> bool {
        if self.excluded_dirs.contains(name) {
            return false;
        }
        !name.starts_with('.') || self.visible_dotfiles.contains(name)
    }
}
