//! Tests for get-server-info and show-config CLI commands

use crate::cli::test_helpers::create_cli_test_services;
use sonar::cli::commands::config::{execute as execute_config, ConfigArgs};
use sonar::cli::commands::info::{execute as execute_info, InfoArgs, InfoResponse};
use sonar::cli::OutputFormat;

// =============================================================================
// get-server-info tests
// =============================================================================

#[test]
fn test_info_summary() {
    let (services, _repo) = create_cli_test_services();

    let info = InfoResponse::collect(&services, false);
    assert_eq!(info.name, "sonar");
    assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(info.protocol, "MCP 2024-11-05");
    assert_eq!(info.tools, 9);
    assert!(info.qa_entries.is_none());
    assert!(info.tool_names.is_empty());

    let json = serde_json::to_value(&info).unwrap();
    assert!(json.get("qa_entries").is_none());
    assert!(json.get("tool_names").is_none());
}

#[test]
fn test_info_detailed() {
    let (services, _repo) = create_cli_test_services();

    let info = InfoResponse::collect(&services, true);
    assert_eq!(info.qa_entries, Some(services.qa.current().total_entries()));
    assert_eq!(info.tool_names.len(), info.tools);
    assert_eq!(info.tool_names[0], "search_code");
}

#[tokio::test]
async fn test_server_info_human_and_json() {
    let (services, _repo) = create_cli_test_services();

    let result = execute_info(InfoArgs { detailed: true }, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Get server info should succeed");

    let result = execute_info(InfoArgs { detailed: false }, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Get server info (JSON) should succeed");
}

// =============================================================================
// show-config tests
// =============================================================================

#[tokio::test]
async fn test_show_config_human() {
    let (services, _repo) = create_cli_test_services();

    let result = execute_config(ConfigArgs { all: false }, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Show config should succeed");
}

#[tokio::test]
async fn test_show_config_all() {
    let (services, _repo) = create_cli_test_services();

    let result = execute_config(ConfigArgs { all: true }, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Show config --all should succeed");
}

/// JSON output is the serialized configuration
#[tokio::test]
async fn test_show_config_json() {
    let (services, repo) = create_cli_test_services();

    let json = serde_json::to_value(&*services.config).unwrap();
    assert_eq!(json["project"]["root"], repo.path().display().to_string());
    assert_eq!(json["search"]["default_max_results"], 100);

    let result = execute_config(ConfigArgs { all: false }, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Show config (JSON) should succeed");
}
