//! Unified service container for Sonar
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::error::{Result, SonarError};
use crate::core::explorer::Explorer;
use crate::core::qa::QaHandle;
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Search, file retrieval and tree introspection
    pub explorer: Arc<Explorer>,

    /// Current Q&A index
    pub qa: Arc<QaHandle>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    ///
    /// Fails if the project root is not a directory or the walker
    /// configuration is invalid. The Q&A index is built here, once.
    pub fn new(config: Config) -> Result<Self> {
        if !config.project.root.is_dir() {
            return Err(SonarError::ConfigError(format!(
                "Project root is not a directory: {}",
                config.project.root.display()
            )));
        }

        let config = Arc::new(config);
        let explorer = Arc::new(Explorer::new(&config)?);
        let qa = Arc::new(QaHandle::new(Arc::clone(&config)));

        Ok(Self {
            explorer,
            qa,
            config,
        })
    }
}
