//! Integration tests for the MCP servers over the HTTP transport
//!
//! These tests verify the complete MCP protocol implementation including:
//! - Server initialization and handshake
//! - Tool and resource discovery
//! - Tool execution and resource reads
//! - Error handling (unknown capabilities, bad params, bad JSON)

use axum::body::Body;
use axum::http::{Request, StatusCode};
use mx_mcp_rust::router::create_app_router;
use mx_mcp_rust::servers::ServerKind;
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot`

mod common;

/// Helper function to create a test app instance
fn create_test_app(kind: ServerKind) -> axum::Router {
    create_app_router(common::handler_for(kind))
}

/// Helper function to send a JSON-RPC request and get the response
async fn send_jsonrpc_request(
    app: &axum::Router,
    method: &str,
    params: Option<Value>,
    id: i32,
) -> (StatusCode, Value) {
    let request_body = json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": params,
        "id": id
    });

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&request_body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

#[tokio::test]
async fn test_mcp_sse_endpoint() {
    let app = create_test_app(ServerKind::Template);

    let request = Request::builder()
        .method("GET")
        .uri("/mcp")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(content_type, "text/event-stream");

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_str = String::from_utf8(body_bytes.to_vec()).unwrap();

    assert!(body_str.contains("event: endpoint"));
    assert!(body_str.contains("data: /mcp"));
}

#[tokio::test]
async fn test_mcp_initialize() {
    let app = create_test_app(ServerKind::Template);

    let (status, body) = send_jsonrpc_request(&app, "initialize", None, 1).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], 1);

    let result = &body["result"];
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "mx-template");
    assert_eq!(result["serverInfo"]["version"], "0.1.0");
    assert!(result["capabilities"]["tools"].is_object());
    assert!(result["capabilities"]["resources"].is_object());
}

#[tokio::test]
async fn test_mcp_initialize_advertises_only_registered_kinds() {
    let app = create_test_app(ServerKind::SdkRs);
    let (_, body) = send_jsonrpc_request(&app, "initialize", None, 1).await;
    let capabilities = &body["result"]["capabilities"];
    assert!(capabilities["resources"].is_object());
    assert!(capabilities.get("tools").is_none());

    let app = create_test_app(ServerKind::ApiService);
    let (_, body) = send_jsonrpc_request(&app, "initialize", None, 2).await;
    let capabilities = &body["result"]["capabilities"];
    assert!(capabilities["tools"].is_object());
    assert!(capabilities.get("resources").is_none());
    assert_eq!(body["result"]["serverInfo"]["version"], "0.0.1");
}

#[tokio::test]
async fn test_mcp_tools_list() {
    let app = create_test_app(ServerKind::ApiService);

    let (status, body) = send_jsonrpc_request(&app, "tools/list", None, 2).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);

    let tools = body["result"]["tools"].as_array().unwrap();
    let names: Vec<_> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        [
            "get_egld_price",
            "get_egld_total_supply",
            "get_egld_circulating_supply",
            "get_egld_market_cap",
            "get_egld_staked",
        ]
    );

    let price = &tools[0];
    assert_eq!(price["description"], "Retrieves the price of EGLD");
    assert_eq!(price["inputSchema"]["type"], "object");
}

#[tokio::test]
async fn test_mcp_resources_list() {
    let app = create_test_app(ServerKind::SdkPyCli);

    let (status, body) = send_jsonrpc_request(&app, "resources/list", None, 3).await;

    assert_eq!(status, StatusCode::OK);

    let resources = body["result"]["resources"].as_array().unwrap();
    assert_eq!(resources.len(), 8);

    let first = &resources[0];
    assert_eq!(first["uri"], "mx-sdk-py-cli://creating-wallets");
    assert_eq!(first["name"], "How to create a new account wallet");
    assert_eq!(first["mimeType"], "text/plain");
    assert_eq!(resources[7]["uri"], "mx-sdk-py-cli://querying-contract-views");
}

#[tokio::test]
async fn test_mcp_empty_listing_is_valid() {
    let app = create_test_app(ServerKind::SdkRs);

    let (status, body) = send_jsonrpc_request(&app, "tools/list", None, 4).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["tools"], json!([]));
}

#[tokio::test]
async fn test_mcp_resources_read() {
    let app = create_test_app(ServerKind::SdkRs);

    let params = json!({ "uri": "mx-sdk-rs://building-contracts" });
    let (status, body) = send_jsonrpc_request(&app, "resources/read", Some(params), 5).await;

    assert_eq!(status, StatusCode::OK);

    let contents = body["result"]["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 1);

    let content = &contents[0];
    assert_eq!(content["uri"], "mx-sdk-rs://building-contracts");
    assert_eq!(content["mimeType"], "text/plain");
    assert!(content["text"]
        .as_str()
        .unwrap()
        .contains("\"sc-meta all build\""));
}

#[tokio::test]
async fn test_mcp_resources_read_unknown_uri() {
    let app = create_test_app(ServerKind::SdkRs);

    let params = json!({ "uri": "mx-sdk-rs://deploying-contracts" });
    let (status, body) = send_jsonrpc_request(&app, "resources/read", Some(params), 6).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("result").is_none());
    assert_eq!(body["error"]["code"], -32601);
    assert_eq!(
        body["error"]["message"],
        "Resource not found: mx-sdk-rs://deploying-contracts"
    );
}

#[tokio::test]
async fn test_mcp_tool_call_template() {
    let app = create_test_app(ServerKind::Template);

    let params = json!({
        "name": "tool_1",
        "arguments": { "parameter1": "a", "parameter2": "b" }
    });

    let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), 7).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 7);

    let result = &body["result"];
    assert_eq!(result["content"], json!([{ "type": "text", "text": "Tool 1 response" }]));
    assert!(result.get("isError").is_none());
}

#[tokio::test]
async fn test_mcp_tool_call_without_arguments() {
    let app = create_test_app(ServerKind::Template);

    let (_, body) =
        send_jsonrpc_request(&app, "tools/call", Some(json!({ "name": "tool_2" })), 8).await;

    assert_eq!(body["result"]["content"][0]["text"], "Tool 2 response");
}

#[tokio::test]
async fn test_mcp_tool_call_unknown_tool() {
    let app = create_test_app(ServerKind::ApiService);

    let params = json!({
        "name": "nonexistent_tool",
        "arguments": {}
    });

    let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), 12).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("result").is_none());

    let error = &body["error"];
    assert_eq!(error["code"], -32601);
    assert_eq!(error["message"], "Unknown tool: nonexistent_tool");
}

#[tokio::test]
async fn test_mcp_tool_call_invalid_params() {
    let app = create_test_app(ServerKind::Template);

    let (status, body) =
        send_jsonrpc_request(&app, "tools/call", Some(json!({ "arguments": {} })), 13).await;

    assert_eq!(status, StatusCode::OK);

    let error = &body["error"];
    assert_eq!(error["code"], -32602);
    assert!(error["message"]
        .as_str()
        .unwrap()
        .contains("Invalid params"));
}

#[tokio::test]
async fn test_mcp_unknown_method() {
    let app = create_test_app(ServerKind::Template);

    let (status, body) = send_jsonrpc_request(&app, "unknown/method", None, 11).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], 11);

    let error = &body["error"];
    assert_eq!(error["code"], -32601);
    assert_eq!(error["message"], "Method not found");
}

#[tokio::test]
async fn test_mcp_invalid_json() {
    let app = create_test_app(ServerKind::Template);

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from("invalid json {{{"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();

    assert_eq!(body["error"]["code"], -32700);
    assert_eq!(body["error"]["message"], "Parse error");
}

#[tokio::test]
async fn test_mcp_ping() {
    let app = create_test_app(ServerKind::Template);

    let (status, body) = send_jsonrpc_request(&app, "ping", None, 14).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 14);
    assert_eq!(body["result"], json!({}));
}

#[tokio::test]
async fn test_mcp_notifications_initialized() {
    let app = create_test_app(ServerKind::Template);

    let (status, body) = send_jsonrpc_request(&app, "notifications/initialized", None, 15).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["result"], json!({}));
}

#[tokio::test]
async fn test_mcp_invalid_method_type() {
    let app = create_test_app(ServerKind::Template);

    // method should be a string, let's pass a number
    let request_body = json!({
        "jsonrpc": "2.0",
        "method": 123,
        "id": 1
    });

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&request_body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
