//! Tool registry for managing MCP tools

use super::handler::McpToolHandler;
use crate::mcp::protocol::ToolSchema;
use std::collections::HashMap;
use std::sync::Arc;

/// Registered tools, listed in registration order
///
/// Registering a name twice replaces the earlier handler in place.
pub struct ToolRegistry {
    handlers: Vec<Arc<dyn McpToolHandler>>,
    by_name: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    pub fn register(&mut self, handler: Arc<dyn McpToolHandler>) {
        let name = handler.name().to_string();
        match self.by_name.get(&name) {
            Some(&slot) => self.handlers[slot] = handler,
            None => {
                self.by_name.insert(name, self.handlers.len());
                self.handlers.push(handler);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn McpToolHandler>> {
        self.by_name.get(name).map(|&slot| &self.handlers[slot])
    }

    /// Schemas for tools/list
    pub fn list(&self) -> Vec<ToolSchema> {
        self.handlers.iter().map(|handler| handler.schema()).collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.handlers.iter().map(|handler| handler.name()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
