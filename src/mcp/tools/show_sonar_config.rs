//! Show Sonar config tool handler
//!
//! Returns the current configuration of the running sonar-mcp server.

use super::handler::{parse_args, text_content, McpToolHandler};
use crate::core::config::Config;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ShowSonarConfigHandler {
    config: Arc<Config>,
}

impl ShowSonarConfigHandler {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    fn format_config(&self) -> String {
        let mut output = String::from("# Sonar MCP Configuration\n\n");

        output.push_str("## Project\n");
        output.push_str(&format!(
            "- **Root:** {}\n\n",
            self.config.project.root.display()
        ));

        let search = &self.config.search;
        output.push_str("## Search\n");
        output.push_str(&format!(
            "- **Default Max Results:** {} (cap {})\n",
            search.default_max_results, search.max_results_cap
        ));
        output.push_str(&format!(
            "- **Default Context Lines:** {} (cap {})\n",
            search.default_context_lines, search.max_context_lines
        ));
        output.push_str(&format!(
            "- **Max Pattern Length:** {}\n",
            search.max_pattern_length
        ));
        output.push_str(&format!(
            "- **Max File Size:** {} MB\n\n",
            search.max_file_size_mb
        ));

        let walker = &self.config.walker;
        output.push_str("## Walker\n");
        output.push_str(&format!(
            "- **Extensions:** {} types\n",
            walker.extensions.len()
        ));
        output.push_str(&format!(
            "- **Special Files:** {} names\n",
            walker.special_files.len()
        ));
        output.push_str(&format!(
            "- **Excluded Directories:** {} names\n",
            walker.excluded_dirs.len()
        ));
        output.push_str(&format!(
            "- **Exclude Patterns:** {} patterns\n\n",
            walker.exclude_patterns.len()
        ));

        output.push_str("## Tree\n");
        output.push_str(&format!(
            "- **Default Max Depth:** {} (cap {})\n\n",
            self.config.tree.default_max_depth, self.config.tree.max_depth_cap
        ));

        let qa = &self.config.qa;
        output.push_str("## Q&A\n");
        output.push_str(&format!(
            "- **Services Document:** {}\n",
            qa.services_doc.display()
        ));
        output.push_str(&format!(
            "- **Narrative Directory:** {} ({})\n",
            qa.narrative_dir.display(),
            if qa.narrative_enabled { "enabled" } else { "disabled" }
        ));
        output.push_str(&format!(
            "- **Max Answer Lines:** {}\n",
            qa.max_answer_lines
        ));

        output
    }

    fn format_config_detailed(&self) -> String {
        let mut output = self.format_config();
        let walker = &self.config.walker;

        output.push_str("\n## Extensions\n");
        for ext in &walker.extensions {
            output.push_str(&format!("- `.{ext}`\n"));
        }

        output.push_str("\n## Special Files\n");
        for name in &walker.special_files {
            output.push_str(&format!("- `{name}`\n"));
        }

        output.push_str("\n## Excluded Directories\n");
        for name in &walker.excluded_dirs {
            output.push_str(&format!("- `{name}`\n"));
        }

        if !walker.exclude_patterns.is_empty() {
            output.push_str("\n## Exclude Patterns\n");
            for pattern in &walker.exclude_patterns {
                output.push_str(&format!("- `{pattern}`\n"));
            }
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for ShowSonarConfigHandler {
    fn name(&self) -> &str {
        "show_sonar_config"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "show_sonar_config".to_string(),
            description: "Show the current configuration of the running sonar-mcp server. \
                         Shows project root, search limits, file selection rules, tree \
                         settings and Q&A sources. Fast operation (<1ms)."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "detailed": {
                        "type": "boolean",
                        "description": "List every extension, special file and excluded directory",
                        "default": false
                    }
                },
                "required": []
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct ConfigArgs {
            #[serde(default)]
            detailed: bool,
        }

        let args: ConfigArgs = parse_args(args)?;

        let text = if args.detailed {
            self.format_config_detailed()
        } else {
            self.format_config()
        };

        Ok(text_content(text))
    }
}
