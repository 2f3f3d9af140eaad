//! MCP handler integration tests

#[cfg(test)]
mod tests {
    use crate::common::{create_test_services, TestRepo};
    use serde_json::{json, Value};
    use sonar::mcp::handlers::ProtocolHandlers;
    use sonar::mcp::protocol::*;

    fn create_test_handlers() -> (ProtocolHandlers, TestRepo) {
        let repo = TestRepo::music_app();
        let services = create_test_services(repo.path());
        (ProtocolHandlers::new(services), repo)
    }

    fn call(id: i64, name: &str, arguments: Value) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(id)),
            method: "tools/call".to_string(),
            params: Some(json!({
                "name": name,
                "arguments": arguments
            })),
        }
    }

    fn text_of(response: &JsonRpcResponse) -> &str {
        response.result.as_ref().unwrap()["content"][0]["text"]
            .as_str()
            .unwrap()
    }

    #[tokio::test]
    async fn test_initialize_handler() {
        let (handlers, _repo) = create_test_handlers();

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: "initialize".to_string(),
            params: Some(json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {"tools": {}},
                "clientInfo": {"name": "test", "version": "1.0"}
            })),
        };

        let response = handlers.handle_initialize(request).await.unwrap();

        assert_eq!(response.jsonrpc, "2.0");
        assert!(response.error.is_none());

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], "sonar-mcp");
        assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
    }

    #[tokio::test]
    async fn test_initialize_without_params() {
        let (handlers, _repo) = create_test_handlers();

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: "initialize".to_string(),
            params: None,
        };

        let response = handlers.handle_initialize(request).await.unwrap();
        assert!(response.error.is_none());
        assert_eq!(response.result.unwrap()["serverInfo"]["name"], "sonar-mcp");
    }

    #[tokio::test]
    async fn test_notifications_initialized() {
        let (handlers, _repo) = create_test_handlers();

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: None,
            method: "notifications/initialized".to_string(),
            params: Some(json!({})),
        };

        assert!(!handlers.is_initialized());
        let response = handlers.handle_initialized(request).await.unwrap();
        assert!(handlers.is_initialized());

        assert!(response.id.is_none());
        assert!(response.result.is_none());
        assert!(response.error.is_none());
    }

    #[tokio::test]
    async fn test_tools_list_has_tools() {
        let (handlers, _repo) = create_test_handlers();

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(2)),
            method: "tools/list".to_string(),
            params: None,
        };

        let response = handlers.handle_tools_list(request).await.unwrap();

        let result = response.result.unwrap();
        let tools = result["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 9);
        assert_eq!(handlers.tool_count(), 9);

        let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
        // Explorer, knowledge base, then server tools
        assert_eq!(
            names,
            vec![
                "search_code",
                "read_file",
                "get_project_structure",
                "list_qa",
                "search_qa",
                "get_service_info",
                "get_codebase_overview",
                "get_server_info",
                "show_sonar_config",
            ]
        );
        assert!(tools.iter().all(|t| t["inputSchema"]["type"] == "object"));
    }

    #[tokio::test]
    async fn test_tools_call_missing_params() {
        let (handlers, _repo) = create_test_handlers();

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(3)),
            method: "tools/call".to_string(),
            params: None,
        };

        let response = handlers.handle_tools_call(request).await.unwrap();

        assert!(response.result.is_none());
        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_PARAMS);
        assert!(error.message.contains("Missing params"));
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool() {
        let (handlers, _repo) = create_test_handlers();

        let response = handlers
            .handle_tools_call(call(4, "nonexistent_tool", json!({})))
            .await
            .unwrap();

        let err = response.error.unwrap();
        assert_eq!(err.code, INVALID_REQUEST);
        assert!(err.message.contains("nonexistent_tool"));
    }

    #[tokio::test]
    async fn test_search_code_via_tools_call() {
        let (handlers, _repo) = create_test_handlers();

        let response = handlers
            .handle_tools_call(call(
                5,
                "search_code",
                json!({"pattern": "def get_\\w+", "file_filter": "\\.py$"}),
            ))
            .await
            .unwrap();

        assert!(response.error.is_none(), "{:?}", response.error);
        let text = text_of(&response);
        assert!(text.contains("Found 1 matches in 1 files"));
        assert!(text.contains("## `backend/app/api/songs.py` (1 matches)"));
        assert!(text.contains("def get_song(song_id: int):"));
    }

    #[tokio::test]
    async fn test_search_code_invalid_pattern_is_not_rpc_error() {
        let (handlers, _repo) = create_test_handlers();

        let response = handlers
            .handle_tools_call(call(6, "search_code", json!({"pattern": "("})))
            .await
            .unwrap();

        assert!(response.error.is_none());
        assert!(text_of(&response).contains("was rejected"));
    }

    #[tokio::test]
    async fn test_search_code_missing_pattern() {
        let (handlers, _repo) = create_test_handlers();

        let response = handlers
            .handle_tools_call(call(7, "search_code", json!({})))
            .await
            .unwrap();

        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_read_file_via_tools_call() {
        let (handlers, _repo) = create_test_handlers();

        let response = handlers
            .handle_tools_call(call(8, "read_file", json!({"file_path": "backend/Dockerfile"})))
            .await
            .unwrap();

        let text = text_of(&response);
        assert!(text.contains("**File:** `backend/Dockerfile`"));
        assert!(text.contains("FROM python:3.12"));
    }

    #[tokio::test]
    async fn test_read_file_error_codes() {
        let (handlers, _repo) = create_test_handlers();

        let cases = [
            ("../../etc/passwd", ACCESS_DENIED),
            ("backend/nope.py", NOT_FOUND),
            ("backend", INVALID_TARGET),
        ];

        for (i, (path, code)) in cases.iter().enumerate() {
            let response = handlers
                .handle_tools_call(call(9 + i as i64, "read_file", json!({"file_path": path})))
                .await
                .unwrap();

            assert!(response.result.is_none());
            let error = response.error.unwrap();
            assert_eq!(error.code, *code, "unexpected code for {path}");
            assert!(error.message.contains(path));
        }
    }

    #[tokio::test]
    async fn test_search_qa_via_tools_call() {
        let (handlers, _repo) = create_test_handlers();

        let response = handlers
            .handle_tools_call(call(20, "search_qa", json!({"query": "offline"})))
            .await
            .unwrap();

        let text = text_of(&response);
        assert!(text.contains("How does offline mode work?"));
        assert!(text.contains("**Category:** Mobile | **Source:** mobile/offline.md"));
    }

    #[tokio::test]
    async fn test_search_qa_empty_query_is_invalid_params() {
        let (handlers, _repo) = create_test_handlers();

        let response = handlers
            .handle_tools_call(call(21, "search_qa", json!({"query": ""})))
            .await
            .unwrap();

        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_get_service_info_via_tools_call() {
        let (handlers, _repo) = create_test_handlers();

        let response = handlers
            .handle_tools_call(call(22, "get_service_info", json!({"service_name": "playlist"})))
            .await
            .unwrap();

        let text = text_of(&response);
        assert!(text.contains("# Playlist Service"));
        assert!(text.contains("- **reorder**: Moves a track within a playlist"));
    }

    #[tokio::test]
    async fn test_list_qa_mobile_category() {
        let (handlers, _repo) = create_test_handlers();

        let response = handlers
            .handle_tools_call(call(23, "list_qa", json!({"category": "mobile"})))
            .await
            .unwrap();

        let text = text_of(&response);
        assert!(text.contains("## Mobile (`mobile`, 1 entries)"));
        assert!(text.contains("_Source: mobile/offline.md_"));
    }

    #[tokio::test]
    async fn test_ping_handler() {
        let (handlers, _repo) = create_test_handlers();

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(30)),
            method: "ping".to_string(),
            params: None,
        };

        let response = handlers.handle_ping(request).await.unwrap();

        assert!(response.error.is_none());
        assert_eq!(response.result.unwrap(), json!({}));
    }
}
