//! List Q&A tool handler
//!
//! Browses the knowledge index category by category.

use super::handler::{parse_args, text_content, McpToolHandler};
use super::helpers::truncate_text;
use crate::core::qa::QaCategory;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use crate::mcp::utils::SEARCH_OUTPUT_MAX_CHARS;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ListQaHandler {
    services: Arc<Services>,
}

impl ListQaHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_category(category: &QaCategory, output: &mut String) {
        output.push_str(&format!(
            "## {} (`{}`, {} entries)\n\n_{}_\n\n",
            category.name,
            category.key,
            category.entries.len(),
            category.description
        ));

        if category.entries.is_empty() {
            output.push_str("No entries.\n\n");
            return;
        }

        for entry in &category.entries {
            output.push_str(&format!("### {}\n\n{}\n", entry.question, entry.answer));
            if let Some(origin) = &entry.origin {
                output.push_str(&format!("\n_Source: {origin}_\n"));
            }
            output.push('\n');
        }
    }
}

#[async_trait]
impl McpToolHandler for ListQaHandler {
    fn name(&self) -> &str {
        "list_qa"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_qa".to_string(),
            description: "List the project knowledge base: question/answer entries grouped into \
                         categories (backend, frontend, database, api, general and any categories \
                         found in the narrative docs). Pass a category key to list only that \
                         bucket. Use search_qa to look for a topic across all categories."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "category": {
                        "type": "string",
                        "description": "Category key, e.g. 'backend' or 'api'"
                    }
                },
                "required": []
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct ListQaArgs {
            #[serde(default)]
            category: Option<String>,
        }

        let args: ListQaArgs = parse_args(args)?;

        let index = self.services.qa.current();
        let all = index.get_all_qa();

        let mut output = String::new();

        match args.category.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => {
                let key = key.to_lowercase();
                let category = all.get(&key).ok_or_else(|| {
                    let known: Vec<&str> = all.0.iter().map(|c| c.key.as_str()).collect();
                    McpError::InvalidParams(format!(
                        "Unknown category '{key}'. Available: {}",
                        known.join(", ")
                    ))
                })?;
                Self::format_category(category, &mut output);
            }
            _ => {
                output.push_str(&format!(
                    "# Knowledge Base\n\n{} entries in {} categories\n\n",
                    all.total_entries(),
                    all.0.len()
                ));
                for category in &all.0 {
                    Self::format_category(category, &mut output);
                }
            }
        }

        Ok(text_content(truncate_text(&output, SEARCH_OUTPUT_MAX_CHARS)))
    }
}
