//! Print registered tool schemas

use super::helpers::Runtime;
use mission_control_core::{config::MissionConfig, error::Result};

pub fn handle(config: &MissionConfig) -> Result<()> {
    let runtime = Runtime::new(config);
    let schemas = runtime.registry.schemas();
    println!("{}", serde_json::to_string_pretty(&schemas)?);
    Ok(())
}
