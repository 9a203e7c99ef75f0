use serde::{Deserialize, Serialize};

/// Where the engine should route a tool result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolResultDirection {
    /// Fed back into the model's context, not shown to the user directly
    ToServer,
    /// Forwarded to the human-facing surface
    ToClient,
}

/// Outcome of one tool invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    pub payload: String,
    pub direction: ToolResultDirection,
}

impl ToolResult {
    pub fn to_server(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            direction: ToolResultDirection::ToServer,
        }
    }

    pub fn to_client(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            direction: ToolResultDirection::ToClient,
        }
    }
}
