//! MCP wire format tests

#[cfg(test)]
mod tests {
    use serde_json::json;
    use sonar::mcp::protocol::*;

    #[test]
    fn test_parse_initialize_params() {
        let req: JsonRpcRequest = serde_json::from_str(
            r#"{
                "jsonrpc": "2.0",
                "id": 1,
                "method": "initialize",
                "params": {
                    "protocolVersion": "2024-11-05",
                    "capabilities": {"tools": {}},
                    "clientInfo": {"name": "claude-desktop", "version": "1.0"}
                }
            }"#,
        )
        .unwrap();

        let params: InitializeParams = serde_json::from_value(req.params.unwrap()).unwrap();
        assert_eq!(params.protocol_version.as_deref(), Some("2024-11-05"));
        assert_eq!(params.client_info.unwrap().name, "claude-desktop");
    }

    #[test]
    fn test_initialize_params_all_optional() {
        let params: InitializeParams = serde_json::from_value(json!({})).unwrap();
        assert!(params.protocol_version.is_none());
        assert!(params.client_info.is_none());
    }

    #[test]
    fn test_parse_notification_without_id() {
        let json = r#"{"jsonrpc": "2.0", "method": "notifications/initialized"}"#;

        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert!(req.id.is_none());
        assert!(req.params.is_none());
    }

    #[test]
    fn test_parse_tool_call_params() {
        let params: ToolCallParams = serde_json::from_value(json!({
            "name": "read_file",
            "arguments": {"file_path": "README.md"}
        }))
        .unwrap();

        assert_eq!(params.name, "read_file");
        assert_eq!(params.arguments["file_path"], "README.md");

        // Arguments may be omitted entirely
        let bare: ToolCallParams =
            serde_json::from_value(json!({"name": "get_codebase_overview"})).unwrap();
        assert!(bare.arguments.is_null());
    }

    #[test]
    fn test_serialize_initialize_result() {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: "sonar-mcp".to_string(),
                version: "0.3.0".to_string(),
            },
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["protocolVersion"], "2024-11-05");
        assert_eq!(json["serverInfo"]["name"], "sonar-mcp");
        assert_eq!(json["capabilities"]["tools"]["listChanged"], false);
    }

    #[test]
    fn test_tool_schema_uses_input_schema_key() {
        let schema = ToolSchema {
            name: "search_qa".to_string(),
            description: "Search the knowledge base".to_string(),
            input_schema: json!({"type": "object", "required": ["query"]}),
        };

        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["inputSchema"]["required"][0], "query");
        assert!(json.get("input_schema").is_none());
    }

    #[test]
    fn test_tool_result_text_block() {
        let result = ToolResult {
            content: vec![ContentBlock::Text {
                text: "# Knowledge Base".to_string(),
            }],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            json!({"content": [{"type": "text", "text": "# Knowledge Base"}]})
        );
    }

    #[test]
    fn test_error_response_omits_result() {
        let response = JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(4)),
            result: None,
            error: Some(JsonRpcError {
                code: ACCESS_DENIED,
                message: "Access denied: ../etc/passwd".to_string(),
                data: None,
            }),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"code\":-32001"));
        assert!(!json.contains("\"result\""));
        assert!(!json.contains("\"data\""));
    }

    #[test]
    fn test_standard_and_domain_codes_distinct() {
        let codes = [
            PARSE_ERROR,
            INVALID_REQUEST,
            METHOD_NOT_FOUND,
            INVALID_PARAMS,
            INTERNAL_ERROR,
            ACCESS_DENIED,
            NOT_FOUND,
            INVALID_TARGET,
            UNREADABLE_FILE,
        ];
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
        assert_eq!(UNREADABLE_FILE, -32004);
    }
}
