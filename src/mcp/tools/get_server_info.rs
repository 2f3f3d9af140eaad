//! Get server info tool handler
//!
//! Returns version and build information about the running sonar-mcp server.

use super::handler::{text_content, McpToolHandler};
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema, PROTOCOL_VERSION};
use async_trait::async_trait;
use serde_json::{json, Value};

/// Tools advertised by the server, with one-line summaries
pub const TOOL_SUMMARIES: [(&str, &str); 9] = [
    ("search_code", "Regex search over the project source tree"),
    ("read_file", "Read a project file by relative path"),
    ("get_project_structure", "Show the project directory tree"),
    ("list_qa", "List knowledge-base entries by category"),
    ("search_qa", "Search the knowledge base"),
    ("get_service_info", "Describe a documented backend service"),
    ("get_codebase_overview", "Summarize stack, layout and services"),
    ("get_server_info", "Show server version (this tool)"),
    ("show_sonar_config", "Show current configuration"),
];

pub struct GetServerInfoHandler;

impl Default for GetServerInfoHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl GetServerInfoHandler {
    pub fn new() -> Self {
        Self
    }

    fn format_info(&self) -> String {
        let version = env!("CARGO_PKG_VERSION");
        let rust_version = env!("CARGO_PKG_RUST_VERSION");

        let mut output = String::from("# Sonar MCP Server Information\n\n");

        output.push_str("## Version\n");
        output.push_str(&format!("- **Version:** {version}\n"));
        output.push_str(&format!("- **Rust Version:** {rust_version}\n\n"));

        output.push_str("## Server Details\n");
        output.push_str("- **Name:** sonar-mcp\n");
        output.push_str("- **Description:** Regex code search and project Q&A MCP server\n");
        output.push_str(&format!("- **Protocol:** MCP {PROTOCOL_VERSION}\n\n"));

        output.push_str("## Available Tools\n");
        for (name, summary) in TOOL_SUMMARIES {
            output.push_str(&format!("- {name}: {summary}\n"));
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for GetServerInfoHandler {
    fn name(&self) -> &str {
        "get_server_info"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_server_info".to_string(),
            description: "Get version and build information about the running sonar-mcp server. \
                         Returns server version, protocol version and available tools. \
                         Fast operation (<1ms)."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        let text = self.format_info();
        Ok(text_content(text))
    }
}
