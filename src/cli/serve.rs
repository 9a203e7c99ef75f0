//! HTTP status API command

use super::helpers::{api_config, Runtime};
use mission_control_core::{api::ApiServer, config::MissionConfig, error::Result};
use tracing::debug;

/// Handle status API startup command
pub async fn handle(addr: Option<String>, config: &MissionConfig) -> Result<()> {
    debug!("Starting status API...");

    let api = api_config(addr, config)?;
    let runtime = Runtime::new(config);

    println!();
    println!("🛰  Mission Control Status API");
    println!();
    println!("   Address: http://{}", api.addr);
    println!();
    println!("   Endpoints:");
    println!("   - GET  /api/state - Mission and notification snapshot");
    println!("   - GET  /api/tools - Registered tool schemas");
    println!("   - POST /api/tools/:name - Invoke a tool");
    println!("   - GET  /health - Health check");
    println!();

    let server = ApiServer::new(api, runtime.state, runtime.registry);
    server.serve().await?;

    Ok(())
}
