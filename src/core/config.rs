//! Configuration management for the Sonar engine.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, SonarError};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub walker: WalkerConfig,
    #[serde(default)]
    pub tree: TreeConfig,
    #[serde(default)]
    pub qa: QaConfig,
}

/// Project configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectConfig {
    /// Directory treated as the top of the searchable tree
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

/// Regex search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Result cap used when the caller gives none
    #[serde(default = "default_max_results")]
    pub default_max_results: usize,

    /// Hard ceiling on max_results (larger requests are clamped)
    #[serde(default = "default_max_results_cap")]
    pub max_results_cap: usize,

    /// Context lines used when the caller gives none
    #[serde(default = "default_context_lines")]
    pub default_context_lines: usize,

    /// Hard ceiling on context_lines
    #[serde(default = "default_max_context_lines")]
    pub max_context_lines: usize,

    /// Longest accepted pattern, in bytes
    #[serde(default = "default_max_pattern_length")]
    pub max_pattern_length: usize,

    /// Maximum file size in MB (larger files are skipped)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,
}

/// Candidate file selection
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WalkerConfig {
    /// Searchable extensions, without the leading dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Extensionless (or dot-prefixed) file names that are always searchable
    #[serde(default = "default_special_files")]
    pub special_files: Vec<String>,

    /// Directory names pruned during traversal
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,

    /// Extra glob patterns matched against relative paths
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

/// Directory tree introspection
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TreeConfig {
    #[serde(default = "default_max_depth")]
    pub default_max_depth: usize,

    #[serde(default = "default_max_depth_cap")]
    pub max_depth_cap: usize,

    /// Dotfiles that stay visible in the tree
    #[serde(default = "default_visible_dotfiles")]
    pub visible_dotfiles: Vec<String>,
}

/// Q&A index sources
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QaConfig {
    /// Structured service documentation (JSON), relative to the project root
    #[serde(default = "default_services_doc")]
    pub services_doc: PathBuf,

    /// Narrative documentation directory, relative to the project root
    #[serde(default = "default_narrative_dir")]
    pub narrative_dir: PathBuf,

    #[serde(default = "default_true")]
    pub narrative_enabled: bool,

    /// Body lines kept per extracted answer
    #[serde(default = "default_max_answer_lines")]
    pub max_answer_lines: usize,

    /// Entries kept per narrative document
    #[serde(default = "default_max_entries_per_document")]
    pub max_entries_per_document: usize,
}

// Default value functions
fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_max_results() -> usize {
    100
}

fn default_max_results_cap() -> usize {
    1000
}

fn default_context_lines() -> usize {
    2
}

fn default_max_context_lines() -> usize {
    50
}

fn default_max_pattern_length() -> usize {
    1000
}

fn default_max_file_size() -> usize {
    10
}

fn default_max_depth() -> usize {
    4
}

fn default_max_depth_cap() -> usize {
    32
}

fn default_services_doc() -> PathBuf {
    PathBuf::from("backend/docs/backend_services_documentation.json")
}

fn default_narrative_dir() -> PathBuf {
    PathBuf::from("docs")
}

fn default_true() -> bool {
    true
}

fn default_max_answer_lines() -> usize {
    5
}

fn default_max_entries_per_document() -> usize {
    50
}

fn default_extensions() -> Vec<String> {
    [
        // Source
        "py", "js", "jsx", "ts", "tsx", "rs", "sh", "sql",
        // Markup and styles
        "html", "css", "scss", "md", "txt",
        // Config and data
        "json", "yml", "yaml", "toml",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_special_files() -> Vec<String> {
    vec![
        "Dockerfile".to_string(),
        "Makefile".to_string(),
        ".gitignore".to_string(),
        ".dockerignore".to_string(),
        ".env.example".to_string(),
    ]
}

fn default_excluded_dirs() -> Vec<String> {
    [
        "node_modules",
        ".git",
        "__pycache__",
        ".next",
        "dist",
        "build",
        "target",
        ".venv",
        "venv",
        "env",
        ".pytest_cache",
        ".vercel",
        "coverage",
        ".nyc_output",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_visible_dotfiles() -> Vec<String> {
    vec![
        ".env.example".to_string(),
        ".gitignore".to_string(),
        ".dockerignore".to_string(),
    ]
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_max_results: default_max_results(),
            max_results_cap: default_max_results_cap(),
            default_context_lines: default_context_lines(),
            max_context_lines: default_max_context_lines(),
            max_pattern_length: default_max_pattern_length(),
            max_file_size_mb: default_max_file_size(),
        }
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            special_files: default_special_files(),
            excluded_dirs: default_excluded_dirs(),
            exclude_patterns: Vec::new(),
        }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            default_max_depth: default_max_depth(),
            max_depth_cap: default_max_depth_cap(),
            visible_dotfiles: default_visible_dotfiles(),
        }
    }
}

impl Default for QaConfig {
    fn default() -> Self {
        Self {
            services_doc: default_services_doc(),
            narrative_dir: default_narrative_dir(),
            narrative_enabled: true,
            max_answer_lines: default_max_answer_lines(),
            max_entries_per_document: default_max_entries_per_document(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SonarError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Default configuration rooted at `root`
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let mut config = Self::default();
        config.project.root = root.into();
        config
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. SONAR_CONFIG env var
    /// 2. XDG config file (~/.config/sonar/config.toml)
    /// 3. ./sonar.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("SONAR_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("sonar.toml").exists() {
                Self::from_file("sonar.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(root) = env::var("SONAR_PROJECT_ROOT") {
            self.project.root = PathBuf::from(root);
        }

        // Search configuration
        if let Ok(max_results) = env::var("SONAR_MAX_RESULTS") {
            if let Ok(n) = max_results.parse() {
                self.search.default_max_results = n;
            }
        }
        if let Ok(cap) = env::var("SONAR_MAX_RESULTS_CAP") {
            if let Ok(n) = cap.parse() {
                self.search.max_results_cap = n;
            }
        }
        if let Ok(context) = env::var("SONAR_CONTEXT_LINES") {
            if let Ok(n) = context.parse() {
                self.search.default_context_lines = n;
            }
        }
        if let Ok(max_size) = env::var("SONAR_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.search.max_file_size_mb = size;
            }
        }

        // Tree configuration
        if let Ok(depth) = env::var("SONAR_MAX_DEPTH") {
            if let Ok(d) = depth.parse() {
                self.tree.default_max_depth = d;
            }
        }

        // Q&A sources
        if let Ok(doc) = env::var("SONAR_SERVICES_DOC") {
            self.qa.services_doc = PathBuf::from(doc);
        }
        if let Ok(dir) = env::var("SONAR_NARRATIVE_DIR") {
            self.qa.narrative_dir = PathBuf::from(dir);
        }
        if let Ok(enabled) = env::var("SONAR_NARRATIVE_ENABLED") {
            if let Ok(b) = enabled.parse() {
                self.qa.narrative_enabled = b;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.project.root.as_os_str().is_empty() {
            return Err(SonarError::ConfigError(
                "Project root must not be empty".to_string(),
            ));
        }

        if self.search.default_max_results == 0 {
            return Err(SonarError::ConfigError(
                "Default max results must be non-zero".to_string(),
            ));
        }

        if self.search.default_max_results > self.search.max_results_cap {
            return Err(SonarError::ConfigError(
                "Default max results cannot exceed the max results cap".to_string(),
            ));
        }

        if self.search.default_context_lines > self.search.max_context_lines {
            return Err(SonarError::ConfigError(
                "Default context lines cannot exceed max context lines".to_string(),
            ));
        }

        if self.search.max_pattern_length == 0 {
            return Err(SonarError::ConfigError(
                "Max pattern length must be non-zero".to_string(),
            ));
        }

        if self.search.max_file_size_mb == 0 {
            return Err(SonarError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        if self.walker.extensions.is_empty() && self.walker.special_files.is_empty() {
            return Err(SonarError::ConfigError(
                "At least one extension or special file name is required".to_string(),
            ));
        }

        if self.tree.default_max_depth > self.tree.max_depth_cap {
            return Err(SonarError::ConfigError(
                "Default max depth cannot exceed the max depth cap".to_string(),
            ));
        }

        if self.qa.max_answer_lines == 0 {
            return Err(SonarError::ConfigError(
                "Max answer lines must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolve a configured path against the project root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project.root.join(path)
        }
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Project root: {:?}", self.project.root);
        tracing::info!(
            "  Max results: {} (cap {})",
            self.search.default_max_results,
            self.search.max_results_cap
        );
        tracing::info!(
            "  Context lines: {} (cap {})",
            self.search.default_context_lines,
            self.search.max_context_lines
        );
        tracing::info!("  Max file size: {} MB", self.search.max_file_size_mb);
        tracing::info!("  Extensions: {} entries", self.walker.extensions.len());
        tracing::info!(
            "  Excluded dirs: {} entries",
            self.walker.excluded_dirs.len()
        );
        tracing::info!(
            "  Tree depth: {} (cap {})",
            self.tree.default_max_depth,
            self.tree.max_depth_cap
        );
        tracing::info!("  Services doc: {:?}", self.qa.services_doc);
        tracing::info!(
            "  Narrative dir: {:?} (enabled: {})",
            self.qa.narrative_dir,
            self.qa.narrative_enabled
        );
    }
}
