//! Get codebase overview tool handler

use super::handler::{text_content, McpToolHandler};
use crate::core::qa::model::StructureEntry;
use crate::core::qa::CodebaseOverview;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetCodebaseOverviewHandler {
    services: Arc<Services>,
}

impl GetCodebaseOverviewHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_overview(&self, overview: &CodebaseOverview) -> String {
        let mut output = format!("# {}\n\n", overview.project);

        if !overview.technologies.is_empty() {
            output.push_str("## Technologies\n\n");
            for (area, aspects) in &overview.technologies {
                output.push_str(&format!("### {area}\n"));
                for (aspect, value) in aspects {
                    output.push_str(&format!("- **{aspect}:** {value}\n"));
                }
                output.push('\n');
            }
        }

        if !overview.structure.is_empty() {
            output.push_str("## Structure\n\n");
            for (path, entry) in &overview.structure {
                match entry {
                    StructureEntry::Description(text) => {
                        output.push_str(&format!("- `{path}`: {text}\n"));
                    }
                    StructureEntry::Section(items) => {
                        output.push_str(&format!("- `{path}`\n"));
                        for (sub, text) in items {
                            output.push_str(&format!("  - `{sub}`: {text}\n"));
                        }
                    }
                }
            }
            output.push('\n');
        }

        output.push_str("## Services\n\n");
        if overview.services.is_empty() {
            output.push_str("No services documented.\n\n");
        } else {
            for service in &overview.services {
                if service.description.is_empty() {
                    output.push_str(&format!("- **{}**\n", service.name));
                } else {
                    output.push_str(&format!(
                        "- **{}**: {}\n",
                        service.name, service.description
                    ));
                }
            }
            output.push('\n');
        }

        output.push_str("## Knowledge Base\n\n");
        for category in &overview.categories {
            output.push_str(&format!(
                "- {} (`{}`): {} entries\n",
                category.name, category.key, category.entries
            ));
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for GetCodebaseOverviewHandler {
    fn name(&self) -> &str {
        "get_codebase_overview"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_codebase_overview".to_string(),
            description: "High-level summary of the project: technology stack, directory layout, \
                         documented services and knowledge-base size per category. \
                         Good first call when starting work on an unfamiliar codebase."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        let index = self.services.qa.current();
        Ok(text_content(self.format_overview(index.overview())))
    }
}
