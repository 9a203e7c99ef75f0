//! Configuration inspection

use mission_control_core::config::{default_config_path, MissionConfig};
use mission_control_core::error::Result;

/// Print the effective configuration as TOML
pub fn show(config: &MissionConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print where the configuration file is read from
pub fn path() {
    match default_config_path() {
        Some(path) => println!("{}", path.display()),
        None => println!("No configuration directory available"),
    }
}
