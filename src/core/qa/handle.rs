//! Shared read-only handle to the current Q&A index.
//!
//! Readers take an `Arc` snapshot and never block each other for
//! longer than the pointer copy. `reload` builds a complete new index
//! first and only then swaps it in, so a snapshot is never observed
//! half-built.

use std::sync::{Arc, RwLock};

use super::engine::QaIndex;
use super::loader::build_index;
use crate::core::config::Config;

pub struct QaHandle {
    config: Arc<Config>,
    current: RwLock<Arc<QaIndex>>,
}

impl QaHandle {
    /// Build the initial index from `config`
    pub fn new(config: Arc<Config>) -> Self {
        let index = build_index(&config);
        Self {
            config,
            current: RwLock::new(Arc::new(index)),
        }
    }

    /// Wrap an already built index
    pub fn from_index(config: Arc<Config>, index: QaIndex) -> Self {
        Self {
            config,
            current: RwLock::new(Arc::new(index)),
        }
    }

    /// Snapshot of the index as of now
    pub fn current(&self) -> Arc<QaIndex> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }

    /// Rebuild from the configured sources and swap atomically
    pub fn reload(&self) -> Arc<QaIndex> {
        let fresh = Arc::new(build_index(&self.config));
        self.swap(Arc::clone(&fresh));
        fresh
    }

    /// Replace the current index, returning the previous one
    pub fn swap(&self, index: Arc<QaIndex>) -> Arc<QaIndex> {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        std::mem::replace(&mut *guard, index)
    }
}
