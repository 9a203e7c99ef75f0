//! HTTP status API
//!
//! Read-only snapshot for dashboards plus tool listing and invocation for
//! engines that prefer HTTP over the stdio bridge.

use crate::error::MissionError;
use crate::state::{StateManager, StateSnapshot};
use crate::tools::{CallSchema, ToolRegistry, ToolResult};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, warn};

/// Number of ports after the configured one to try when it is taken
const ALTERNATE_PORTS: u16 = 10;

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiServerConfig {
    pub addr: SocketAddr,
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            addr: ([127, 0, 0, 1], 8765).into(),
        }
    }
}

#[derive(Clone)]
struct AppState {
    state: StateManager,
    registry: Arc<ToolRegistry>,
    instance_id: String,
}

/// API server
pub struct ApiServer {
    config: ApiServerConfig,
    state: StateManager,
    registry: Arc<ToolRegistry>,
    instance_id: String,
}

impl ApiServer {
    pub fn new(config: ApiServerConfig, state: StateManager, registry: Arc<ToolRegistry>) -> Self {
        let instance_id = uuid::Uuid::new_v4().to_string()[..8].to_string();

        Self {
            config,
            state,
            registry,
            instance_id,
        }
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Router with every endpoint, middleware attached
    pub fn router(&self) -> Router {
        build_router(self.state.clone(), self.registry.clone(), self.instance_id.clone())
    }

    /// Start serving, falling back to the next free port.
    ///
    /// Tries the configured address first, then up to ten following ports
    /// when it is already in use.
    pub async fn serve(self) -> anyhow::Result<()> {
        let router = self.router();
        let base_port = self.config.addr.port();

        for offset in 0..=ALTERNATE_PORTS {
            let Some(port) = base_port.checked_add(offset) else {
                break;
            };
            let addr = SocketAddr::new(self.config.addr.ip(), port);

            match tokio::net::TcpListener::bind(addr).await {
                Ok(listener) => {
                    info!(
                        "Status API [{}] listening on http://{}",
                        self.instance_id, addr
                    );
                    axum::serve(listener, router).await?;
                    return Ok(());
                }
                Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
                    debug!("Port {} in use, trying next port...", port);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(anyhow::anyhow!(
            "All ports ({}-{}) are in use. Status API unavailable for instance {}.",
            base_port,
            base_port.saturating_add(ALTERNATE_PORTS),
            self.instance_id
        ))
    }
}

/// Build the API router over shared state
pub fn build_router(state: StateManager, registry: Arc<ToolRegistry>, instance_id: String) -> Router {
    let app_state = AppState {
        state,
        registry,
        instance_id,
    };

    Router::new()
        .route("/api/state", get(state_handler))
        .route("/api/tools", get(list_tools_handler))
        .route("/api/tools/:name", post(invoke_tool_handler))
        .route("/health", get(health_handler))
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn state_handler(State(app): State<AppState>) -> Json<StateSnapshot> {
    Json(app.state.snapshot().await)
}

async fn list_tools_handler(State(app): State<AppState>) -> Json<Vec<CallSchema>> {
    Json(app.registry.schemas())
}

async fn invoke_tool_handler(
    State(app): State<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Json<ToolResult>, ApiError> {
    app.registry.lookup(&name)?;
    let args = parse_args(&name, &body)?;
    let result = app.registry.invoke(&name, args).await?;
    Ok(Json(result))
}

/// Decode a request body into a tool's argument payload.
///
/// Only an empty (or all-whitespace) body means "no arguments"; anything
/// else must be valid JSON.
fn parse_args(tool: &str, body: &[u8]) -> crate::error::Result<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| MissionError::invalid_arguments(tool, e))
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub instance_id: String,
    pub tools: usize,
}

async fn health_handler(State(app): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        instance_id: app.instance_id.clone(),
        tools: app.registry.len(),
    })
}

/// Tool failure mapped onto an HTTP status
struct ApiError(MissionError);

impl From<MissionError> for ApiError {
    fn from(err: MissionError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            MissionError::UnknownTool(_) => StatusCode::NOT_FOUND,
            MissionError::InvalidArguments { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            warn!("Tool invocation failed: {}", self.0);
        }

        (status, Json(serde_json::json!({ "error": self.0.to_string() }))).into_response()
    }
}
