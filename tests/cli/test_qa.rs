//! Tests for the knowledge-base CLI commands
//!
//! list-qa, search-qa, get-service-info and get-codebase-overview.

use crate::cli::test_helpers::{create_cli_services_with, create_cli_test_services};
use sonar::cli::commands::overview::{execute as execute_overview, OverviewArgs};
use sonar::cli::commands::qa::{execute_list, execute_search, ListArgs, SearchArgs};
use sonar::cli::commands::service::{execute as execute_service, ServiceArgs};
use sonar::cli::OutputFormat;

// =============================================================================
// list-qa tests
// =============================================================================

#[tokio::test]
async fn test_list_all_human() {
    let (services, _repo) = create_cli_test_services();

    let args = ListArgs {
        category: None,
        questions_only: false,
    };
    let result = execute_list(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_list_category_json() {
    let (services, _repo) = create_cli_test_services();

    let args = ListArgs {
        category: Some("Mobile".to_string()),
        questions_only: true,
    };
    let result = execute_list(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "{:?}", result.err());
}

#[tokio::test]
async fn test_list_unknown_category() {
    let (services, _repo) = create_cli_services_with(&[]);

    let args = ListArgs {
        category: Some("billing".to_string()),
        questions_only: false,
    };
    let err = execute_list(args, &services, OutputFormat::Human)
        .await
        .expect_err("Unknown category should fail");
    assert!(err.to_string().contains("Unknown category 'billing'"));
}

// =============================================================================
// search-qa tests
// =============================================================================

#[tokio::test]
async fn test_search_qa_human() {
    let (services, _repo) = create_cli_test_services();

    let args = SearchArgs {
        query: "seed".to_string(),
    };
    let result = execute_search(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_search_qa_no_hits_json() {
    let (services, _repo) = create_cli_test_services();

    let args = SearchArgs {
        query: "zzz_nothing_zzz".to_string(),
    };
    let result = execute_search(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_search_qa_empty_query() {
    let (services, _repo) = create_cli_test_services();

    let args = SearchArgs {
        query: "  ".to_string(),
    };
    let result = execute_search(args, &services, OutputFormat::Human).await;
    assert!(result.is_err());
}

// =============================================================================
// get-service-info / get-codebase-overview tests
// =============================================================================

#[tokio::test]
async fn test_service_found() {
    let (services, _repo) = create_cli_test_services();

    let args = ServiceArgs {
        name: "auth".to_string(),
    };
    let result = execute_service(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

/// A miss lists the available services rather than failing
#[tokio::test]
async fn test_service_miss_is_not_error() {
    let (services, _repo) = create_cli_test_services();

    let args = ServiceArgs {
        name: "billing".to_string(),
    };
    let result = execute_service(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_overview_human_and_json() {
    let (services, _repo) = create_cli_test_services();

    let result = execute_overview(OverviewArgs {}, &services, OutputFormat::Human).await;
    assert!(result.is_ok());

    let result = execute_overview(OverviewArgs {}, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}
