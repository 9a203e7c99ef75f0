//! Tool bridge over stdio
//!
//! Reads one JSON-RPC request per line and writes one response per line.
//! Requests without an `id` are notifications and get no response. Logging
//! must stay on stderr while the bridge owns stdout.

use super::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION};
use crate::error::{MissionError, Result};
use crate::tools::ToolRegistry;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};

/// Serves a [`ToolRegistry`] to the conversational engine
pub struct ToolBridge {
    registry: Arc<ToolRegistry>,
}

impl ToolBridge {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Serve stdin/stdout until EOF
    pub async fn run(&self) -> Result<()> {
        let reader = BufReader::new(tokio::io::stdin());
        let writer = tokio::io::stdout();
        self.serve(reader, writer).await
    }

    /// Serve requests from `reader`, writing responses to `writer`, until EOF
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(
            "Tool bridge started with {} tools, listening on stdin...",
            self.registry.len()
        );

        let mut line = String::new();
        loop {
            line.clear();

            if reader.read_line(&mut line).await? == 0 {
                debug!("Received EOF, shutting down");
                break;
            }

            let request = line.trim();
            if request.is_empty() {
                continue;
            }

            debug!("Received request: {}", request);

            let Some(response) = self.process_request(request).await else {
                continue;
            };

            let mut payload = match serde_json::to_string(&response) {
                Ok(payload) => payload,
                Err(e) => {
                    error!("Failed to serialize response: {}", e);
                    serde_json::to_string(&JsonRpcResponse::error(
                        response.id,
                        JsonRpcError::internal_error(format!("Serialization error: {}", e)),
                    ))?
                }
            };
            payload.push('\n');

            debug!("Sending response: {}", payload.trim_end());
            writer.write_all(payload.as_bytes()).await?;
            writer.flush().await?;
        }

        info!("Tool bridge shutting down");
        Ok(())
    }

    /// Handle one request line, returning `None` for notifications
    pub async fn process_request(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    None,
                    JsonRpcError::parse_error(format!("Invalid JSON: {}", e)),
                ));
            }
        };

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::error(
                request.id,
                JsonRpcError::invalid_request("jsonrpc must be '2.0'"),
            ));
        }

        if request.id.is_none() {
            debug!("Ignoring notification: {}", request.method);
            return None;
        }

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request),
            "tools/list" => self.handle_tools_list(request),
            "tools/call" => self.handle_tools_call(request).await,
            _ => JsonRpcResponse::error(request.id, JsonRpcError::method_not_found(&request.method)),
        };
        Some(response)
    }

    fn handle_initialize(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        debug!("Handling initialize");

        JsonRpcResponse::success(
            request.id,
            json!({
                "serverInfo": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION")
                },
                "capabilities": {
                    "tools": {}
                }
            }),
        )
    }

    fn handle_tools_list(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        debug!("Handling tools/list");

        JsonRpcResponse::success(request.id, json!({ "tools": self.registry.schemas() }))
    }

    async fn handle_tools_call(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        #[derive(Deserialize)]
        struct CallParams {
            name: String,
            #[serde(default)]
            arguments: Value,
        }

        let params: CallParams = match serde_json::from_value(request.params) {
            Ok(params) => params,
            Err(e) => {
                return JsonRpcResponse::error(
                    request.id,
                    JsonRpcError::invalid_params(format!("Invalid tools/call params: {}", e)),
                );
            }
        };

        debug!("Handling tools/call for {}", params.name);

        match self.registry.invoke(&params.name, params.arguments).await {
            Ok(result) => match serde_json::to_value(&result) {
                Ok(value) => JsonRpcResponse::success(request.id, value),
                Err(e) => JsonRpcResponse::error(
                    request.id,
                    JsonRpcError::internal_error(format!("Serialization error: {}", e)),
                ),
            },
            Err(MissionError::UnknownTool(name)) => JsonRpcResponse::error(
                request.id,
                JsonRpcError::method_not_found(&name).with_data(json!({ "tool": name })),
            ),
            Err(e @ MissionError::InvalidArguments { .. }) => {
                JsonRpcResponse::error(request.id, JsonRpcError::invalid_params(e.to_string()))
            }
            Err(e) => {
                warn!("Tool {} failed: {}", params.name, e);
                JsonRpcResponse::error(
                    request.id,
                    JsonRpcError::internal_error(format!("Tool execution failed: {}", e)),
                )
            }
        }
    }
}
