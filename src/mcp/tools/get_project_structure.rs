//! Get project structure tool handler

use super::handler::{parse_args, text_content, McpToolHandler};
use super::helpers::render_tree;
use crate::core::services::Services;
use crate::core::types::{NodeType, ProjectNode};
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetProjectStructureHandler {
    services: Arc<Services>,
}

impl GetProjectStructureHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_tree(&self, tree: &ProjectNode, depth: usize) -> String {
        let mut output = format!(
            "**Project:** `{}`\n**Depth:** {}\n**Files shown:** {}\n\n",
            tree.name,
            depth,
            tree.file_count()
        );

        output.push_str("```\n");
        output.push_str(&render_tree(tree));
        output.push_str("```\n");

        if contains_truncated(tree) {
            output.push_str(
                "\n`...` marks directories below the depth limit. \
                 Increase max_depth to expand them.\n",
            );
        }

        output
    }
}

fn contains_truncated(node: &ProjectNode) -> bool {
    node.children
        .as_ref()
        .map(|children| {
            children
                .iter()
                .any(|c| c.node_type == NodeType::Truncated || contains_truncated(c))
        })
        .unwrap_or(false)
}

#[async_trait]
impl McpToolHandler for GetProjectStructureHandler {
    fn name(&self) -> &str {
        "get_project_structure"
    }

    fn schema(&self) -> ToolSchema {
        let tree = &self.services.config.tree;
        ToolSchema {
            name: "get_project_structure".to_string(),
            description: "Show the directory tree of the project. Dependency and build \
                         directories (node_modules, .git, target, ...) and most dotfiles are \
                         hidden. Entries are sorted by name; files carry their size. \
                         Directories below max_depth are shown as '...'."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "max_depth": {
                        "type": "integer",
                        "description": "Levels below the root to expand",
                        "default": tree.default_max_depth,
                        "minimum": 0,
                        "maximum": tree.max_depth_cap
                    }
                },
                "required": []
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct StructureArgs {
            #[serde(default)]
            max_depth: Option<usize>,
        }

        let args: StructureArgs = parse_args(args)?;

        let tree_config = &self.services.config.tree;
        let depth = args
            .max_depth
            .unwrap_or(tree_config.default_max_depth)
            .min(tree_config.max_depth_cap);

        let tree = self.services.explorer.get_project_structure(Some(depth));

        Ok(text_content(self.format_tree(&tree, depth)))
    }
}
