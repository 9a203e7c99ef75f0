//! Tool dispatch
//!
//! Call schemas bound to async handlers, plus the attachment procedures that
//! register the mission and notification tools at startup.

pub mod mission_tools;
pub mod notification_tools;
pub mod registry;
pub mod result;
pub mod schema;

pub use mission_tools::attach_mission_tools;
pub use notification_tools::attach_notification_tools;
pub use registry::{ToolEntry, ToolHandler, ToolRegistry};
pub use result::{ToolResult, ToolResultDirection};
pub use schema::{CallSchema, ParamType, ParameterSchema, PropertySchema};

use crate::config::NotificationSettings;
use crate::state::StateManager;

/// Registry with every mission and notification tool attached
pub fn default_registry(state: &StateManager, settings: &NotificationSettings) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    attach_mission_tools(&mut registry, state, settings);
    attach_notification_tools(&mut registry, state, settings);
    registry
}
