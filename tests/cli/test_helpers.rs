//! CLI test helpers
//!
//! Arc<Services> wrappers matching CLI execute() signatures.

use crate::common::TestRepo;
use sonar::core::config::Config;
use sonar::core::services::Services;
use std::sync::Arc;

/// Services over the music app fixture (keep the repo alive during the test)
pub fn create_cli_test_services() -> (Arc<Services>, TestRepo) {
    let repo = TestRepo::music_app();
    let services =
        Arc::new(Services::new(Config::for_root(repo.path())).expect("Failed to create services"));
    (services, repo)
}

/// Services over a repository with only the given files
pub fn create_cli_services_with(files: &[(&str, &str)]) -> (Arc<Services>, TestRepo) {
    let repo = TestRepo::with_files(files);
    let services =
        Arc::new(Services::new(Config::for_root(repo.path())).expect("Failed to create services"));
    (services, repo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cli_test_services() {
        let (services, repo) = create_cli_test_services();
        assert!(repo.path().join("backend/app/main.py").exists());
        assert!(services.config.search.default_max_results > 0);
    }

    #[test]
    fn test_create_cli_services_with() {
        let (services, _repo) = create_cli_services_with(&[("a.py", "x = 1\n")]);
        let file = services.explorer.get_file_content("a.py").unwrap();
        assert_eq!(file.lines, 1);
    }
}
