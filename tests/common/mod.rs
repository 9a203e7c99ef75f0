//! Common test utilities and helpers

#![allow(dead_code)]

use mission_control_core::{
    config::NotificationSettings, tools::default_registry, StateManager, ToolRegistry,
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Fresh stores with every tool attached using default TTLs
pub fn mission_control() -> (Arc<ToolRegistry>, StateManager) {
    let state = StateManager::new();
    let registry = default_registry(&state, &NotificationSettings::default());
    (Arc::new(registry), state)
}

/// Invoke a tool that is expected to succeed and return its payload
pub async fn call(registry: &ToolRegistry, tool: &str, args: Value) -> String {
    registry
        .invoke(tool, args)
        .await
        .unwrap_or_else(|e| panic!("{} failed: {}", tool, e))
        .payload
}

/// TTL the current notification was stored with, ignoring expiry
pub async fn stored_ttl(state: &StateManager) -> Option<Duration> {
    state
        .transact(|_, notifications| notifications.current_ttl())
        .await
}
