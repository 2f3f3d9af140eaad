//! Tests for read-file and get-project-structure CLI commands

use crate::cli::test_helpers::create_cli_test_services;
use sonar::cli::commands::read_file::{execute as execute_read, ReadFileArgs};
use sonar::cli::commands::structure::{execute as execute_structure, StructureArgs};
use sonar::cli::OutputFormat;

// =============================================================================
// read-file tests
// =============================================================================

#[tokio::test]
async fn test_read_file_human() {
    let (services, _repo) = create_cli_test_services();

    let args = ReadFileArgs {
        path: "backend/app/main.py".to_string(),
    };
    let result = execute_read(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Read should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_read_file_json() {
    let (services, _repo) = create_cli_test_services();

    let args = ReadFileArgs {
        path: "README.md".to_string(),
    };
    let result = execute_read(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

/// Traversal outside the root is refused
#[tokio::test]
async fn test_read_file_traversal() {
    let (services, _repo) = create_cli_test_services();

    let args = ReadFileArgs {
        path: "../outside.txt".to_string(),
    };
    let err = execute_read(args, &services, OutputFormat::Human)
        .await
        .expect_err("Traversal should fail");
    assert!(err.to_string().contains("Access denied"));
}

#[tokio::test]
async fn test_read_file_missing() {
    let (services, _repo) = create_cli_test_services();

    let args = ReadFileArgs {
        path: "nope.txt".to_string(),
    };
    let err = execute_read(args, &services, OutputFormat::Json)
        .await
        .expect_err("Missing file should fail");
    assert!(err.to_string().contains("Not found: nope.txt"));
}

#[tokio::test]
async fn test_read_file_directory() {
    let (services, _repo) = create_cli_test_services();

    let args = ReadFileArgs {
        path: "frontend".to_string(),
    };
    let result = execute_read(args, &services, OutputFormat::Human).await;
    assert!(result.is_err());
}

// =============================================================================
// get-project-structure tests
// =============================================================================

#[tokio::test]
async fn test_structure_default_depth() {
    let (services, _repo) = create_cli_test_services();

    let args = StructureArgs { max_depth: None };
    let result = execute_structure(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_structure_depth_json() {
    let (services, _repo) = create_cli_test_services();

    let args = StructureArgs { max_depth: Some(1) };
    let result = execute_structure(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}
