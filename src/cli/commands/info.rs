//! Info command - show version and server information

use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::mcp::protocol::PROTOCOL_VERSION;
use crate::mcp::tools::get_server_info::TOOL_SUMMARIES;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Also list the MCP tools and the knowledge-base size
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

/// Server information response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub protocol: String,
    pub tools: usize,
    pub project_root: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qa_entries: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tool_names: Vec<String>,
}

impl InfoResponse {
    pub fn collect(services: &Services, detailed: bool) -> Self {
        let (qa_entries, tool_names) = if detailed {
            (
                Some(services.qa.current().total_entries()),
                TOOL_SUMMARIES
                    .iter()
                    .map(|(name, _)| name.to_string())
                    .collect(),
            )
        } else {
            (None, Vec::new())
        };

        Self {
            name: "sonar".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            protocol: format!("MCP {PROTOCOL_VERSION}"),
            tools: TOOL_SUMMARIES.len(),
            project_root: services.explorer.root().display().to_string(),
            qa_entries,
            tool_names,
        }
    }
}

/// Execute the info command
pub async fn execute(
    args: InfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let info = InfoResponse::collect(services, args.detailed);

    match format {
        OutputFormat::Human => {
            println!("{} {}", info.name, info.version);
            println!("Protocol: {}", info.protocol);
            println!("Tools: {}", info.tools);
            for name in &info.tool_names {
                println!("  - {name}");
            }
            println!("Root: {}", info.project_root);
            if let Some(count) = info.qa_entries {
                println!("Q&A entries: {count}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
