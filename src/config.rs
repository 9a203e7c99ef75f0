//! Configuration for mission control
//!
//! Values are layered with the `config` crate, later sources winning:
//! 1. Built-in defaults
//! 2. Optional TOML file (`--config`, or `<config dir>/mission-control/config.toml`)
//! 3. Environment variables prefixed `MISSION_CONTROL_`, sections separated by `__`
//!
//! ```toml
//! [server]
//! addr = "127.0.0.1:8765"
//!
//! [notifications]
//! action_seconds = 10
//! launch_seconds = 15
//! min_display_seconds = 20
//!
//! [briefing]
//! instructions = "Greet the Captain..."
//! ```

use crate::error::Result;
use crate::mission::briefing::DEFAULT_BRIEFING;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "MISSION_CONTROL";

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub notifications: NotificationSettings,

    #[serde(default)]
    pub briefing: BriefingSettings,
}

/// Status API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Address the status API binds to
    #[serde(default = "default_addr")]
    pub addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            addr: default_addr(),
        }
    }
}

/// Lifetimes of the notifications pushed by tool handlers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// TTL for purchase and selection confirmations
    #[serde(default = "default_action_seconds")]
    pub action_seconds: u64,

    /// TTL for launch outcomes
    #[serde(default = "default_launch_seconds")]
    pub launch_seconds: u64,

    /// Floor applied to `show_message` durations
    #[serde(default = "default_min_display_seconds")]
    pub min_display_seconds: u64,
}

impl NotificationSettings {
    pub fn action_ttl(&self) -> Duration {
        Duration::from_secs(self.action_seconds)
    }

    pub fn launch_ttl(&self) -> Duration {
        Duration::from_secs(self.launch_seconds)
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            action_seconds: default_action_seconds(),
            launch_seconds: default_launch_seconds(),
            min_display_seconds: default_min_display_seconds(),
        }
    }
}

/// Base instructions handed to the conversational engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BriefingSettings {
    #[serde(default = "default_instructions")]
    pub instructions: String,
}

impl Default for BriefingSettings {
    fn default() -> Self {
        Self {
            instructions: default_instructions(),
        }
    }
}

fn default_addr() -> String {
    "127.0.0.1:8765".to_string()
}

fn default_action_seconds() -> u64 {
    10
}

fn default_launch_seconds() -> u64 {
    15
}

fn default_min_display_seconds() -> u64 {
    20
}

fn default_instructions() -> String {
    DEFAULT_BRIEFING.to_string()
}

impl MissionConfig {
    /// Load configuration from an explicit file (if given) or the default
    /// location, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).or_else(default_config_path);
        Self::load_from(path.as_deref())
    }

    /// Load from `path` (skipped when `None` or missing) plus environment
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            debug!("Reading configuration from {}", path.display());
            builder = builder.add_source(config::File::from(path.to_path_buf()).required(false));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// `<config dir>/mission-control/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mission-control").join("config.toml"))
}
