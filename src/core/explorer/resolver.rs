//! Safe resolution of caller-supplied relative paths.
//!
//! A path is checked lexically against the root before anything on
//! disk is touched, then checked again after symlinks are resolved.
//! Error messages only ever echo the path the caller supplied.

use std::fs;
use std::path::{Component, Path, PathBuf};

use super::decode::decode_bytes;
use crate::core::error::{Result, SonarError};
use crate::core::types::FileContent;

/// Resolves relative paths under a fixed root
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let root = std::path::absolute(&root).unwrap_or(root);
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map `relative` to a path inside the root
    ///
    /// Fails with `AccessDenied` if the path is absolute or climbs out
    /// of the root, and with `NotFound` if nothing exists there.
    pub fn resolve(&self, relative: &str) -> Result<PathBuf> {
        let candidate = Path::new(relative);
        if candidate.is_absolute() || candidate.has_root() {
            return Err(SonarError::AccessDenied(relative.to_string()));
        }

        let joined = normalize(&self.root.join(candidate));
        if !joined.starts_with(normalize(&self.root)) {
            return Err(SonarError::AccessDenied(relative.to_string()));
        }

        if fs::symlink_metadata(&joined).is_err() {
            return Err(SonarError::NotFound(relative.to_string()));
        }

        // Symlinks may still point outside; compare canonical forms
        let canonical_root = self
            .root
            .canonicalize()
            .map_err(|_| SonarError::NotFound(relative.to_string()))?;
        let canonical = joined
            .canonicalize()
            .map_err(|_| SonarError::NotFound(relative.to_string()))?;

        if !canonical.starts_with(&canonical_root) {
            return Err(SonarError::AccessDenied(relative.to_string()));
        }

        Ok(canonical)
    }

    /// Full text of one file
    pub fn get_file_content(&self, relative: &str) -> Result<FileContent> {
        let path = self.resolve(relative)?;

        let metadata = fs::metadata(&path)
            .map_err(|e| SonarError::UnreadableFile(format!("{relative}: {}", e.kind())))?;
        if metadata.is_dir() {
            return Err(SonarError::InvalidTarget(relative.to_string()));
        }

        let bytes = fs::read(&path)
            .map_err(|e| SonarError::UnreadableFile(format!("{relative}: {}", e.kind())))?;
        let content = decode_bytes(&bytes);

        Ok(FileContent {
            file: relative.to_string(),
            lines: content.lines().count(),
            size: metadata.len(),
            content,
        })
    }
}

/// Lexically collapse `.` and `..` without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
