use crate::tools::{self, GameDevTool, ToolContext};
use anyhow::Context;
use gamedev_core::config::Config;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{BufRead, Write};
use std::path::Path;

// ---------------------------------------------------------------------------
// JSON-RPC 2.0 protocol types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcResponse {
    fn ok(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    fn err(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct ToolContent {
    r#type: &'static str,
    text: String,
}

#[derive(Debug, Serialize)]
struct ToolCallResult {
    content: Vec<ToolContent>,
    #[serde(rename = "isError")]
    is_error: bool,
}

// ---------------------------------------------------------------------------
// Server loop
// ---------------------------------------------------------------------------

pub fn run(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = Config::load_from(config_path).context("failed to load config")?;
    let ctx = ToolContext::from_config(config);
    let tools = tools::all_tools();
    tracing::info!(tools = tools.len(), "gamedev MCP server ready on stdio");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let raw: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                write_response(
                    &stdout,
                    &JsonRpcResponse::err(None, -32700, format!("parse error: {e}")),
                )?;
                continue;
            }
        };

        // Notifications have no "id" key; they get no response
        if !raw
            .as_object()
            .map(|o| o.contains_key("id"))
            .unwrap_or(false)
        {
            continue;
        }

        let request: JsonRpcRequest = match serde_json::from_value(raw) {
            Ok(r) => r,
            Err(e) => {
                write_response(
                    &stdout,
                    &JsonRpcResponse::err(None, -32600, format!("invalid request: {e}")),
                )?;
                continue;
            }
        };

        let response = handle_request(&request, &tools, &ctx);
        write_response(&stdout, &response)?;
    }

    Ok(())
}

fn write_response(stdout: &std::io::Stdout, resp: &JsonRpcResponse) -> anyhow::Result<()> {
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, resp)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Request dispatch (pub for unit tests)
// ---------------------------------------------------------------------------

pub fn handle_request(
    req: &JsonRpcRequest,
    tools: &[Box<dyn GameDevTool>],
    ctx: &ToolContext,
) -> JsonRpcResponse {
    match req.method.as_str() {
        "initialize" => JsonRpcResponse::ok(
            req.id.clone(),
            serde_json::json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": "gamedev",
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        ),

        "tools/list" => {
            let tool_list: Vec<Value> = tools
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "name": t.name(),
                        "description": t.description(),
                        "inputSchema": t.schema()
                    })
                })
                .collect();
            JsonRpcResponse::ok(req.id.clone(), serde_json::json!({ "tools": tool_list }))
        }

        "tools/call" => {
            let Some(params) = &req.params else {
                return JsonRpcResponse::err(req.id.clone(), -32602, "missing params");
            };
            let Some(tool_name) = params["name"].as_str() else {
                return JsonRpcResponse::err(req.id.clone(), -32602, "missing tool name in params");
            };
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            let Some(tool) = tools.iter().find(|t| t.name() == tool_name) else {
                return JsonRpcResponse::err(
                    req.id.clone(),
                    -32601,
                    format!("tool not found: {tool_name}"),
                );
            };

            tracing::info!(tool = tool_name, "tool call");
            let (text, is_error) = match tool.call(args, ctx) {
                Ok(v) => (
                    serde_json::to_string_pretty(&v)
                        .unwrap_or_else(|e| format!("serialization error: {e}")),
                    false,
                ),
                Err(e) => {
                    tracing::warn!(tool = tool_name, "tool call failed");
                    (e, true)
                }
            };

            let call_result = ToolCallResult {
                content: vec![ToolContent {
                    r#type: "text",
                    text,
                }],
                is_error,
            };
            JsonRpcResponse::ok(
                req.id.clone(),
                serde_json::to_value(&call_result)
                    .unwrap_or_else(|e| serde_json::json!({"error": e.to_string()})),
            )
        }

        other => JsonRpcResponse::err(req.id.clone(), -32601, format!("method not found: {other}")),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing;
    use tempfile::TempDir;

    fn make_req(id: i64, method: &str, params: Option<Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".into(),
            id: Some(Value::Number(id.into())),
            method: method.to_string(),
            params,
        }
    }

    #[test]
    fn initialize_returns_capabilities() {
        let ctx = testing::context();
        let tools = tools::all_tools();
        let req = make_req(
            1,
            "initialize",
            Some(serde_json::json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {"name": "test", "version": "0.0.1"}
            })),
        );

        let resp = handle_request(&req, &tools, &ctx);
        assert!(resp.error.is_none());
        let result = resp.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert!(result["capabilities"]["tools"].is_object());
        assert_eq!(result["serverInfo"]["name"], "gamedev");
    }

    #[test]
    fn tools_list_returns_all_three() {
        let ctx = testing::context();
        let tools = tools::all_tools();
        let resp = handle_request(&make_req(2, "tools/list", None), &tools, &ctx);

        let result = resp.result.unwrap();
        let names: Vec<&str> = result["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["create_game_project", "update_game_knowledge", "get_game_templates"]
        );
        assert_eq!(
            result["tools"][0]["inputSchema"]["required"],
            serde_json::json!(["gameName", "gameType", "teamId", "projectPath"])
        );
    }

    #[test]
    fn tools_call_create_game_project() {
        let dir = TempDir::new().unwrap();
        let ctx = testing::context();
        let tools = tools::all_tools();
        let req = make_req(
            3,
            "tools/call",
            Some(serde_json::json!({
                "name": "create_game_project",
                "arguments": {
                    "gameName": "Space Invaders 3D",
                    "gameType": "arcade",
                    "teamId": "T1",
                    "projectPath": dir.path().to_str().unwrap()
                }
            })),
        );

        let resp = handle_request(&req, &tools, &ctx);
        let result = resp.result.unwrap();
        assert_eq!(result["isError"], false);
        let text = result["content"][0]["text"].as_str().unwrap();
        let body: Value = serde_json::from_str(text).unwrap();
        assert_eq!(body["status"], "success");
        assert!(dir.path().join("space-invaders-3d/src/App.tsx").is_file());
    }

    #[test]
    fn tool_error_returns_is_error_true() {
        let ctx = testing::context();
        let tools = tools::all_tools();
        let req = make_req(
            4,
            "tools/call",
            Some(serde_json::json!({
                "name": "update_game_knowledge",
                "arguments": {}
            })),
        );

        let resp = handle_request(&req, &tools, &ctx);
        assert!(resp.error.is_none());
        let result = resp.result.unwrap();
        assert_eq!(result["isError"], true);
        assert_eq!(result["content"][0]["text"], "missing required argument: topics");
    }

    #[test]
    fn tools_call_unknown_tool_returns_error() {
        let ctx = testing::context();
        let tools = tools::all_tools();
        let req = make_req(
            5,
            "tools/call",
            Some(serde_json::json!({"name": "nonexistent_tool", "arguments": {}})),
        );

        let resp = handle_request(&req, &tools, &ctx);
        assert!(resp.result.is_none());
        assert_eq!(resp.error.unwrap().code, -32601);
    }

    #[test]
    fn unknown_method_returns_method_not_found() {
        let ctx = testing::context();
        let tools = tools::all_tools();
        let resp = handle_request(&make_req(6, "unknown/method", None), &tools, &ctx);
        let err = resp.error.unwrap();
        assert_eq!(err.code, -32601);
        assert!(err.message.contains("method not found"));
    }

    #[test]
    fn tools_call_missing_params_returns_error() {
        let ctx = testing::context();
        let tools = tools::all_tools();
        let resp = handle_request(&make_req(7, "tools/call", None), &tools, &ctx);
        assert!(resp.result.is_none());
        assert_eq!(resp.error.unwrap().code, -32602);
    }
}
