//! MCP tool implementations
//!
//! This module contains all MCP tool handlers that expose Sonar's
//! search and knowledge-base functionality to MCP clients.

pub mod get_codebase_overview;
pub mod get_project_structure;
pub mod get_server_info;
pub mod get_service_info;
pub mod handler;
pub mod helpers;
pub mod list_qa;
pub mod read_file;
pub mod registry;
pub mod search_code;
pub mod search_qa;
pub mod show_sonar_config;

pub use get_codebase_overview::GetCodebaseOverviewHandler;
pub use get_project_structure::GetProjectStructureHandler;
pub use get_server_info::GetServerInfoHandler;
pub use get_service_info::GetServiceInfoHandler;
pub use handler::{parse_args, text_content, McpToolHandler};
pub use helpers::{detect_language, format_bytes, render_tree, truncate_text};
pub use list_qa::ListQaHandler;
pub use read_file::ReadFileHandler;
pub use registry::ToolRegistry;
pub use search_code::SearchCodeHandler;
pub use search_qa::SearchQaHandler;
pub use show_sonar_config::ShowSonarConfigHandler;
