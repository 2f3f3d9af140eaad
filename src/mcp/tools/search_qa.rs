//! Search Q&A tool handler

use super::handler::{parse_args, text_content, McpToolHandler};
use crate::core::qa::QaSearchResult;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use crate::mcp::utils::{build_qa_truncation_note, QA_RESULTS_MAX};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct SearchQaHandler {
    services: Arc<Services>,
}

impl SearchQaHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_results(&self, result: &QaSearchResult) -> String {
        let mut output = format!(
            "Found {} entries matching '{}':\n\n",
            result.total_results, result.query
        );

        if result.results.is_empty() {
            output.push_str("No entries found. Try a shorter query or browse with list_qa.");
            return output;
        }

        for (i, hit) in result.results.iter().take(QA_RESULTS_MAX).enumerate() {
            output.push_str(&format!("## {}. {}\n\n", i + 1, hit.question));
            match &hit.origin {
                Some(origin) => output.push_str(&format!(
                    "**Category:** {} | **Source:** {}\n\n",
                    hit.category, origin
                )),
                None => output.push_str(&format!("**Category:** {}\n\n", hit.category)),
            }
            output.push_str(&hit.answer);
            output.push_str("\n\n");
        }

        if result.total_results > QA_RESULTS_MAX {
            output.push_str(&build_qa_truncation_note(QA_RESULTS_MAX, result.total_results));
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for SearchQaHandler {
    fn name(&self) -> &str {
        "search_qa"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search_qa".to_string(),
            description: "Search the project knowledge base for a topic. Case-insensitive \
                         substring match over questions and answers in every category. \
                         Results are tagged with their category and source. \
                         Use for 'how does X work' questions before reading code."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Text to look for, e.g. 'authentication' or 'supabase'",
                        "minLength": 1
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct SearchQaArgs {
            query: String,
        }

        let args: SearchQaArgs = parse_args(args)?;

        let result = self.services.qa.current().search(&args.query)?;

        Ok(text_content(self.format_results(&result)))
    }
}
