//! File system walker with allow-list filtering.
//!
//! Enumerates searchable files under the project root. Excluded
//! directories are pruned before descent, so nothing below them is
//! ever visited. Walk errors (permission denied, etc.) are logged and
//! skipped without aborting the traversal.

use glob::Pattern;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::config::WalkerConfig;
use crate::core::error::{Result, SonarError};

/// A file eligible for content scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Absolute (or root-joined) path used for reading
    pub path: PathBuf,

    /// Path relative to the root, `/`-separated
    pub relative: String,
}

/// File system walker with extension and name allow-lists
#[derive(Debug, Clone)]
pub struct FileWalker {
    /// Lowercased extensions without the leading dot
    extensions: HashSet<String>,

    /// Exact file names searchable regardless of extension
    special_files: HashSet<String>,

    /// Directory names pruned during traversal
    excluded_dirs: HashSet<String>,

    /// Glob patterns matched against relative paths
    exclude_patterns: Vec<Pattern>,
}

impl FileWalker {
    /// Create a new file walker
    ///
    /// # Returns
    ///
    /// A new `FileWalker` or a `ConfigError` if an exclude glob is
    /// invalid
    pub fn new(config: &WalkerConfig) -> Result<Self> {
        let exclude_patterns = config
            .exclude_patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| {
                    SonarError::ConfigError(format!("Invalid exclude pattern '{p}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            extensions: config
                .extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect(),
            special_files: config.special_files.iter().cloned().collect(),
            excluded_dirs: config.excluded_dirs.iter().cloned().collect(),
            exclude_patterns,
        })
    }

    /// Lazily enumerate candidates under `root` in directory order
    ///
    /// Callers that stop early never pay for the rest of the walk.
    pub fn candidates<'a>(&'a self, root: &'a Path) -> impl Iterator<Item = Candidate> + 'a {
        WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(move |e| self.should_descend(e, root))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::debug!("Walk error: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter_map(move |entry| {
                let relative = relative_path(root, entry.path())?;
                if self.is_searchable(entry.path(), &relative) {
                    Some(Candidate {
                        path: entry.into_path(),
                        relative,
                    })
                } else {
                    None
                }
            })
    }

    /// Collect all candidates under `root`
    pub fn collect_files(&self, root: &Path) -> Vec<Candidate> {
        self.candidates(root).collect()
    }

    /// True if `name` is a pruned directory name
    pub fn is_excluded_name(&self, name: &str) -> bool {
        self.excluded_dirs.contains(name)
    }

    /// Decide whether the walk enters (or yields) an entry
    ///
    /// Never filters the root itself.
    fn should_descend(&self, entry: &DirEntry, root: &Path) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }

        let name = entry.file_name().to_string_lossy();
        if self.is_excluded_name(&name) {
            tracing::debug!("Pruning excluded directory: {:?}", entry.path());
            return false;
        }

        if let Some(relative) = relative_path(root, entry.path()) {
            if self.matches_exclude_glob(&relative) {
                tracing::debug!("Pruning directory by pattern: {}", relative);
                return false;
            }
        }

        true
    }

    /// Extension/name allow-list plus exclusion checks on the relative path
    fn is_searchable(&self, path: &Path, relative: &str) -> bool {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        let allowed = self.special_files.contains(name)
            || path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| self.extensions.contains(&e.to_lowercase()))
                .unwrap_or(false);

        if !allowed {
            return false;
        }

        // Segments are checked relative to the root so an excluded name
        // above the root never hides the whole project.
        let in_excluded_dir = relative
            .split('/')
            .rev()
            .skip(1)
            .any(|segment| self.excluded_dirs.contains(segment));

        !in_excluded_dir && !self.matches_exclude_glob(relative)
    }

    fn matches_exclude_glob(&self, relative: &str) -> bool {
        self.exclude_patterns.iter().any(|p| p.matches(relative))
    }
}

/// Relative path with `/` separators, or None if `path` is not under `root`
pub fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let stripped = path.strip_prefix(root).ok()?;
    let segments: Vec<String> = stripped
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}
