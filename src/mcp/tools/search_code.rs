//! Search code tool handler

use super::handler::{parse_args, text_content, McpToolHandler};
use super::helpers::{detect_language, format_context_window, truncate_text};
use crate::core::services::Services;
use crate::core::types::{SearchQuery, SearchResult};
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use crate::mcp::utils::SEARCH_OUTPUT_MAX_CHARS;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct SearchCodeHandler {
    services: Arc<Services>,
}

impl SearchCodeHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_results(&self, result: &SearchResult) -> String {
        if let Some(error) = &result.error {
            return format!(
                "Search for `{}` was rejected.\n\n**Error:** {}\n\n\
                 No files were searched. Fix the pattern and try again.",
                result.pattern, error
            );
        }

        let mut output = format!(
            "Found {} matches in {} files for pattern `{}` ({} files searched):\n\n",
            result.total_matches, result.files_matched, result.pattern, result.files_searched
        );

        if let Some(filter) = &result.file_filter {
            output.push_str(&format!("**File filter:** `{filter}`\n\n"));
        }

        if result.matches.is_empty() {
            output.push_str("No matches found. Try a broader pattern or drop the file filter.");
            return output;
        }

        for file in &result.matches {
            output.push_str(&format!("## `{}` ({} matches)\n\n", file.file, file.matches.len()));

            let lang = detect_language(&file.file);
            for line_match in &file.matches {
                output.push_str(&format!("**Line {}**\n", line_match.line_number));
                output.push_str(&format!(
                    "```{lang}\n{}\n```\n\n",
                    format_context_window(line_match)
                ));
            }
        }

        if result.truncated {
            output.push_str(&format!(
                "---\n\n⚠️ Stopped at max_results={}. Results are the first matches in scan order; \
                 narrow the pattern or add a file_filter to see others.\n",
                result.max_results
            ));
        }

        truncate_text(&output, SEARCH_OUTPUT_MAX_CHARS)
    }
}

#[async_trait]
impl McpToolHandler for SearchCodeHandler {
    fn name(&self) -> &str {
        "search_code"
    }

    fn schema(&self) -> ToolSchema {
        let search = &self.services.config.search;
        ToolSchema {
            name: "search_code".to_string(),
            description: "Search the project source tree with a regular expression. \
                         Every searchable file is scanned line by line in directory order; each \
                         matching line is returned with surrounding context lines. \
                         Scanning stops as soon as max_results matches are collected, so results \
                         are the first matches found, not ranked. \
                         Use file_filter (a regex on the relative path, e.g. '\\.py$') to restrict \
                         the search. Invalid patterns are reported in the output."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "pattern": {
                        "type": "string",
                        "description": "Regular expression matched against each line. Examples: 'def \\w+_song', 'TODO|FIXME'",
                        "minLength": 1,
                        "maxLength": search.max_pattern_length
                    },
                    "case_sensitive": {
                        "type": "boolean",
                        "description": "Match case exactly (default: false)",
                        "default": false
                    },
                    "file_filter": {
                        "type": "string",
                        "description": "Case-insensitive regex applied to the relative file path, e.g. '^backend/.*\\.py$'"
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum number of matching lines",
                        "default": search.default_max_results,
                        "minimum": 1,
                        "maximum": search.max_results_cap
                    },
                    "context_lines": {
                        "type": "integer",
                        "description": "Lines of context before and after each match",
                        "default": search.default_context_lines,
                        "minimum": 0,
                        "maximum": search.max_context_lines
                    }
                },
                "required": ["pattern"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct SearchArgs {
            pattern: String,
            #[serde(default)]
            case_sensitive: bool,
            #[serde(default)]
            file_filter: Option<String>,
            #[serde(default)]
            max_results: Option<usize>,
            #[serde(default)]
            context_lines: Option<usize>,
        }

        let args: SearchArgs = parse_args(args)?;

        let defaults = &self.services.config.search;
        let mut query = SearchQuery::new(args.pattern)
            .case_sensitive(args.case_sensitive)
            .max_results(args.max_results.unwrap_or(defaults.default_max_results))
            .context_lines(args.context_lines.unwrap_or(defaults.default_context_lines));
        if let Some(filter) = args.file_filter {
            query = query.file_filter(filter);
        }

        let result = self.services.explorer.search(&query);

        Ok(text_content(self.format_results(&result)))
    }
}
