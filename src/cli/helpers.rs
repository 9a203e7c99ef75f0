//! Shared startup for the serving commands

use mission_control_core::{
    api::ApiServerConfig, config::MissionConfig, state::StateManager, tools::default_registry,
    ToolRegistry,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::debug;

/// Stores and registry built from configuration
pub struct Runtime {
    pub state: StateManager,
    pub registry: Arc<ToolRegistry>,
}

impl Runtime {
    pub fn new(config: &MissionConfig) -> Self {
        let state = StateManager::new();
        let registry = default_registry(&state, &config.notifications);
        debug!("Registered tools: {}", registry.names().join(", "));

        Self {
            state,
            registry: Arc::new(registry),
        }
    }
}

/// Parse the API address, preferring the command-line override
pub fn api_config(addr: Option<String>, config: &MissionConfig) -> anyhow::Result<ApiServerConfig> {
    let addr = addr.unwrap_or_else(|| config.server.addr.clone());
    let addr: SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address '{}': {}", addr, e))?;
    Ok(ApiServerConfig { addr })
}
