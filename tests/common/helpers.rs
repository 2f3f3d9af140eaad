// Test helper functions

use sonar::core::config::Config;
use sonar::core::services::Services;
use sonar::core::types::{SearchQuery, SearchResult};
use std::path::Path;
use std::sync::Arc;

/// Create services rooted at `root` with default settings
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services(root: &Path) -> Arc<Services> {
    Arc::new(Services::new(Config::for_root(root)).expect("Failed to create services"))
}

/// Run a search with default flags
#[allow(dead_code)] // Used in integration tests
pub fn search(services: &Services, pattern: &str) -> SearchResult {
    services.explorer.search(&SearchQuery::new(pattern))
}

/// Assert the counting invariants every result must hold
#[allow(dead_code)] // Used in integration tests
pub fn assert_cap_invariant(result: &SearchResult) {
    let counted: usize = result.matches.iter().map(|f| f.matches.len()).sum();
    assert_eq!(
        result.total_matches, counted,
        "total_matches must equal the number of line matches"
    );
    assert!(
        result.total_matches <= result.max_results,
        "total_matches ({}) exceeds max_results ({})",
        result.total_matches,
        result.max_results
    );
    assert_eq!(result.files_matched, result.matches.len());
    assert!(result.files_matched <= result.files_searched);
    assert!(result.matches.iter().all(|f| !f.matches.is_empty()));
}
