//! File retrieval and path safety

use crate::common::{create_test_services, TestRepo};
use sonar::SonarError;

#[test]
fn test_get_file_content() {
    let repo = TestRepo::music_app();
    let services = create_test_services(repo.path());

    let file = services
        .explorer
        .get_file_content("backend/app/main.py")
        .unwrap();
    assert_eq!(file.file, "backend/app/main.py");
    assert_eq!(file.lines, 4);
    assert_eq!(file.size, file.content.len() as u64);
    assert!(file.content.starts_with("import os\n"));
}

#[test]
fn test_traversal_is_denied() {
    let repo = TestRepo::music_app();
    let services = create_test_services(repo.path());

    for path in ["../../etc/passwd", "backend/../../outside.txt", "/etc/passwd"] {
        let err = services.explorer.get_file_content(path).unwrap_err();
        assert!(
            matches!(err, SonarError::AccessDenied(_)),
            "{path} should be denied, got {err:?}"
        );
        assert!(err.is_forbidden());
    }
}

#[test]
fn test_denied_message_echoes_caller_path_only() {
    let repo = TestRepo::music_app();
    let services = create_test_services(repo.path());

    let err = services
        .explorer
        .get_file_content("../secret.txt")
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("../secret.txt"));
    assert!(!message.contains(&repo.path().display().to_string()));
}

#[test]
fn test_inner_dotdot_stays_inside() {
    let repo = TestRepo::music_app();
    let services = create_test_services(repo.path());

    let file = services
        .explorer
        .get_file_content("backend/app/../Dockerfile")
        .unwrap();
    assert!(file.content.starts_with("FROM python"));
}

#[test]
fn test_missing_file_is_not_found() {
    let repo = TestRepo::music_app();
    let services = create_test_services(repo.path());

    let err = services
        .explorer
        .get_file_content("backend/missing.py")
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_directory_is_invalid_target() {
    let repo = TestRepo::music_app();
    let services = create_test_services(repo.path());

    let err = services.explorer.get_file_content("backend").unwrap_err();
    assert!(matches!(err, SonarError::InvalidTarget(_)));
}

#[test]
fn test_excluded_files_are_still_readable() {
    // Exclusion governs search and tree listing, not explicit reads
    let repo = TestRepo::music_app();
    let services = create_test_services(repo.path());

    let file = services
        .explorer
        .get_file_content("frontend/node_modules/react/index.js")
        .unwrap();
    assert_eq!(file.lines, 1);
}

#[cfg(unix)]
#[test]
fn test_symlink_escape_is_denied() {
    let outside = TestRepo::with_files(&[("secret.txt", "top secret\n")]);
    let repo = TestRepo::music_app();
    std::os::unix::fs::symlink(
        outside.path().join("secret.txt"),
        repo.path().join("link.txt"),
    )
    .unwrap();
    let services = create_test_services(repo.path());

    let err = services.explorer.get_file_content("link.txt").unwrap_err();
    assert!(matches!(err, SonarError::AccessDenied(_)));
}
