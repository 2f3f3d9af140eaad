//! Read file tool handler

use super::handler::{parse_args, text_content, McpToolHandler};
use super::helpers::{detect_language, format_bytes};
use crate::core::services::Services;
use crate::core::types::FileContent;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use crate::mcp::utils::{build_read_file_warning, READ_FILE_MAX_CHARS};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ReadFileHandler {
    services: Arc<Services>,
}

impl ReadFileHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    /// Format response with metadata
    fn format_response(&self, file: &FileContent, contents: &str) -> String {
        let lang = detect_language(&file.file);

        format!(
            "**File:** `{}`\n\
             **Size:** {} ({} lines)\n\
             **Language:** {}\n\n\
             ```{}\n{}\n```",
            file.file,
            format_bytes(file.size),
            file.lines,
            if lang.is_empty() { "unknown" } else { lang },
            lang,
            contents
        )
    }
}

/// Cut content to the display limit on a char boundary
///
/// Returns the shown prefix and the total char count.
fn clip_content(content: &str) -> (&str, usize) {
    let total = content.chars().count();
    match content.char_indices().nth(READ_FILE_MAX_CHARS) {
        Some((byte_idx, _)) => (&content[..byte_idx], total),
        None => (content, total),
    }
}

#[async_trait]
impl McpToolHandler for ReadFileHandler {
    fn name(&self) -> &str {
        "read_file"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "read_file".to_string(),
            description: "Read the full contents of a project file by its path relative to the \
                         project root. Use when search_code or get_project_structure shows a file \
                         you want to read. Paths that escape the project root are rejected. \
                         Auto-truncates to 20,000 characters max to stay under MCP 25k token limit \
                         (shows warning if truncated). Invalid UTF-8 is replaced, not rejected. \
                         Returns Markdown-formatted code with syntax highlighting."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "file_path": {
                        "type": "string",
                        "description": "Path relative to the project root, e.g. 'backend/app/main.py'",
                        "minLength": 1
                    }
                },
                "required": ["file_path"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct ReadFileArgs {
            file_path: String,
        }

        let args: ReadFileArgs = parse_args(args)?;

        if args.file_path.trim().is_empty() {
            return Err(McpError::InvalidParams(
                "file_path cannot be empty".to_string(),
            ));
        }

        let file = self.services.explorer.get_file_content(&args.file_path)?;
        let (shown, total_chars) = clip_content(&file.content);

        let mut output = String::new();

        if shown.len() < file.content.len() {
            let shown_chars = shown.chars().count();
            let warning = build_read_file_warning(
                shown_chars,
                total_chars,
                shown.lines().count(),
                &file.file,
            );
            output.push_str(&warning);
        }

        output.push_str(&self.format_response(&file, shown));

        Ok(text_content(output))
    }
}
