//! Get service info tool handler

use super::handler::{parse_args, text_content, McpToolHandler};
use crate::core::qa::ServiceLookup;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetServiceInfoHandler {
    services: Arc<Services>,
}

impl GetServiceInfoHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_lookup(&self, lookup: &ServiceLookup) -> String {
        let (Some(key), Some(service)) = (&lookup.key, &lookup.service) else {
            let mut output = format!(
                "{}\n\n",
                lookup.error.as_deref().unwrap_or("Service not found")
            );
            if lookup.available_services.is_empty() {
                output.push_str("No services are documented for this project.");
            } else {
                output.push_str("**Available services:**\n");
                for name in &lookup.available_services {
                    output.push_str(&format!("- `{name}`\n"));
                }
            }
            return output;
        };

        let mut output = format!("# {}\n\n", service.display_name(key));
        output.push_str(&format!("**Key:** `{key}`\n\n"));

        if !service.description.is_empty() {
            output.push_str(&format!("{}\n\n", service.description));
        }

        if !service.capabilities.is_empty() {
            output.push_str("## Capabilities\n\n");
            for capability in &service.capabilities {
                if capability.description.is_empty() {
                    output.push_str(&format!("- **{}**\n", capability.name));
                } else {
                    output.push_str(&format!(
                        "- **{}**: {}\n",
                        capability.name, capability.description
                    ));
                }
            }
            output.push('\n');
        }

        if !service.qa.is_empty() {
            output.push_str("## Q&A\n\n");
            for pair in &service.qa {
                output.push_str(&format!("### {}\n\n{}\n\n", pair.question, pair.answer));
            }
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for GetServiceInfoHandler {
    fn name(&self) -> &str {
        "get_service_info"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_service_info".to_string(),
            description: "Describe one backend service from the structured documentation: \
                         description, capabilities and service Q&A. An exact key wins; \
                         otherwise the first service whose key or name contains the given text \
                         (case-insensitive). On a miss the available service keys are listed."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "service_name": {
                        "type": "string",
                        "description": "Service key or part of its name, e.g. 'auth_service' or 'auth'"
                    }
                },
                "required": ["service_name"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct ServiceArgs {
            service_name: String,
        }

        let args: ServiceArgs = parse_args(args)?;

        let lookup = self
            .services
            .qa
            .current()
            .get_service_info(&args.service_name);

        Ok(text_content(self.format_lookup(&lookup)))
    }
}
