//! Stdio tool bridge command

use super::helpers::{api_config, Runtime};
use mission_control_core::{api::ApiServer, bridge::ToolBridge, config::MissionConfig, error::Result};
use tracing::{debug, warn};

/// Handle bridge startup, optionally serving the status API alongside
pub async fn handle(with_api: bool, addr: Option<String>, config: &MissionConfig) -> Result<()> {
    debug!("Starting tool bridge...");

    let runtime = Runtime::new(config);

    let api_handle = if with_api {
        let server = ApiServer::new(
            api_config(addr, config)?,
            runtime.state.clone(),
            runtime.registry.clone(),
        );
        Some(tokio::spawn(async move {
            if let Err(e) = server.serve().await {
                warn!("Status API stopped: {}", e);
            }
        }))
    } else {
        None
    };

    let bridge = ToolBridge::new(runtime.registry);
    let result = bridge.run().await;

    if let Some(handle) = api_handle {
        handle.abort();
    }

    result
}
