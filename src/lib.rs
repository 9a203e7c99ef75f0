//! Mission Control - tool backend for a voice-driven launch assistant
//!
//! A realtime conversational engine interprets the user's speech and calls
//! named tools. This crate gives those calls their meaning:
//! - A mission state machine tracking procurement and launch readiness
//! - An ephemeral notification store with lazy expiry
//! - A tool registry binding call schemas to async handlers
//!
//! # Architecture
//!
//! - **Mission**: state machine, catalogs, system instructions
//! - **Notification**: single-slot message store
//! - **State**: shared handle owning both stores behind async locks
//! - **Tools**: schemas, registry and the mission/notification handlers
//! - **Bridge**: JSON-RPC 2.0 over stdio for the engine
//! - **API**: HTTP status surface for dashboards
//!
//! # Example
//!
//! ```ignore
//! use mission_control_core::{config::MissionConfig, tools::default_registry, StateManager};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = MissionConfig::load(None)?;
//!     let state = StateManager::new();
//!     let registry = default_registry(&state, &config.notifications);
//!
//!     let result = registry.invoke("buy_rocket", json!({"rocket": "Falcon 9"})).await?;
//!     println!("{}", result.payload);
//!
//!     let snapshot = state.snapshot().await;
//!     println!("{:?}", snapshot.user_message);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod bridge;
pub mod config;
pub mod error;
pub mod mission;
pub mod notification;
pub mod state;
pub mod tools;
pub mod types;

// Re-export commonly used types
pub use config::MissionConfig;
pub use error::{MissionError, Result};
pub use mission::{LaunchBlocker, MissionState};
pub use notification::NotificationStore;
pub use state::{StateManager, StateSnapshot};
pub use tools::{CallSchema, ToolHandler, ToolRegistry, ToolResult, ToolResultDirection};
pub use types::{ActiveNotification, RocketSpec};
