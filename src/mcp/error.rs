//! MCP-specific error types

use thiserror::Error;

use crate::core::error::SonarError;
use crate::mcp::protocol::{
    ACCESS_DENIED, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, INVALID_TARGET,
    NOT_FOUND, PARSE_ERROR, UNREADABLE_FILE,
};

#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Tool error (code {0}): {1}")]
    ToolError(i32, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    /// JSON-RPC error code and message for the response
    pub fn to_code_message(&self) -> (i32, String) {
        match self {
            McpError::ParseError(msg) => (PARSE_ERROR, msg.clone()),
            McpError::InvalidRequest(msg) => (INVALID_REQUEST, msg.clone()),
            McpError::InvalidParams(msg) => (INVALID_PARAMS, msg.clone()),
            McpError::InternalError(msg) => (INTERNAL_ERROR, msg.clone()),
            McpError::ToolError(code, msg) => (*code, msg.clone()),
            McpError::Io(e) => (INTERNAL_ERROR, format!("I/O error: {e}")),
            McpError::Json(e) => (INTERNAL_ERROR, format!("JSON error: {e}")),
        }
    }
}

impl From<SonarError> for McpError {
    fn from(err: SonarError) -> Self {
        let message = err.message();
        match err {
            SonarError::AccessDenied(_) => McpError::ToolError(ACCESS_DENIED, message),
            SonarError::NotFound(_) => McpError::ToolError(NOT_FOUND, message),
            SonarError::InvalidTarget(_) => McpError::ToolError(INVALID_TARGET, message),
            SonarError::UnreadableFile(_) => McpError::ToolError(UNREADABLE_FILE, message),
            SonarError::InvalidPattern(_)
            | SonarError::InvalidParameter(_)
            | SonarError::ConfigError(_) => McpError::InvalidParams(message),
            SonarError::IoError(_) | SonarError::SerdeError(_) | SonarError::TomlError(_) => {
                McpError::InternalError(message)
            }
        }
    }
}
