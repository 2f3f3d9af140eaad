//! Tests for CLI output formatting helpers
//!
//! - Byte formatting (B, KB, MB, GB)
//! - Tree rendering
//! - Print helpers (print_header, print_warning, print_error)

use serial_test::serial;
use sonar::cli::output::{format_bytes, format_tree, print_error, print_header, print_warning};
use sonar::core::types::ProjectNode;

// =============================================================================
// format_bytes tests
// =============================================================================

/// Test byte formatting with various sizes
#[test]
fn test_format_bytes_various_sizes() {
    // Bytes (under 1 KB)
    assert_eq!(format_bytes(0), "0 B");
    assert_eq!(format_bytes(1), "1 B");
    assert_eq!(format_bytes(512), "512 B");

    // Kilobytes
    assert_eq!(format_bytes(1024), "1.0 KB");
    assert_eq!(format_bytes(1536), "1.5 KB");

    // Megabytes
    assert_eq!(format_bytes(1048576), "1.0 MB");
    assert_eq!(format_bytes(10485760), "10.0 MB");

    // Gigabytes
    assert_eq!(format_bytes(1073741824), "1.0 GB");
}

/// Test byte formatting edge cases
#[test]
fn test_format_bytes_edge_cases() {
    assert_eq!(format_bytes(1024 - 1), "1023 B"); // Just under 1 KB
    assert_eq!(format_bytes(1048576 - 1), "1024.0 KB"); // Just under 1 MB
    assert_eq!(format_bytes(1073741824 - 1), "1024.0 MB"); // Just under 1 GB
}

// =============================================================================
// format_tree tests
// =============================================================================

/// Nested directories use continuation rails
#[test]
#[serial]
fn test_format_tree_nested() {
    colored::control::set_override(false);

    let tree = ProjectNode::directory(
        "jukebox",
        vec![
            ProjectNode::directory(
                "backend",
                vec![
                    ProjectNode::file("main.py", 10),
                    ProjectNode::directory("api", vec![ProjectNode::truncated()]),
                ],
            ),
            ProjectNode::file("README.md", 2048),
        ],
    );

    let rendered = format_tree(&tree);
    colored::control::unset_override();

    assert_eq!(
        rendered,
        "jukebox/\n\
         ├── backend/\n\
         │   ├── main.py (10 B)\n\
         │   └── api/\n\
         │       └── ...\n\
         └── README.md (2.0 KB)\n"
    );
}

/// An empty root renders as a single line
#[test]
#[serial]
fn test_format_tree_empty() {
    colored::control::set_override(false);
    let rendered = format_tree(&ProjectNode::directory("empty", vec![]));
    colored::control::unset_override();

    assert_eq!(rendered, "empty/\n");
}

// =============================================================================
// print helper tests
// =============================================================================

/// Print helpers must not panic
#[test]
fn test_print_helpers() {
    print_header("Results");
    print_warning("careful");
    print_error("failed");
}
