//! Notification tools

use super::registry::{decode_args, ToolHandler, ToolRegistry};
use super::result::ToolResult;
use super::schema::{CallSchema, ParamType};
use crate::config::NotificationSettings;
use crate::error::Result;
use crate::state::StateManager;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub const SHOW_MESSAGE: &str = "show_message";

/// Payload returned once a message is on screen
pub const MESSAGE_DISPLAYED: &str = "Message displayed to user";

/// Register the notification tools against `state`
pub fn attach_notification_tools(
    registry: &mut ToolRegistry,
    state: &StateManager,
    settings: &NotificationSettings,
) {
    registry.register(
        SHOW_MESSAGE,
        CallSchema::function(SHOW_MESSAGE, "Display a message to the user for a specified duration")
            .param("message", ParamType::String, "Message to display to the user")
            .param(
                "duration_seconds",
                ParamType::Integer,
                "How long to display the message in seconds",
            ),
        Arc::new(ShowMessage {
            state: state.clone(),
            min_display_seconds: settings.min_display_seconds,
        }),
    );
}

struct ShowMessage {
    state: StateManager,
    min_display_seconds: u64,
}

impl ShowMessage {
    /// Requested duration, raised to the display floor
    fn display_duration(&self, requested: i64) -> Duration {
        let seconds = u64::try_from(requested)
            .unwrap_or(0)
            .max(self.min_display_seconds);
        Duration::from_secs(seconds)
    }
}

#[async_trait]
impl ToolHandler for ShowMessage {
    async fn invoke(&self, args: Value) -> Result<ToolResult> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Params {
            message: String,
            duration_seconds: i64,
        }

        let params: Params = decode_args(SHOW_MESSAGE, args)?;
        let duration = self.display_duration(params.duration_seconds);
        if duration.as_secs() as i64 != params.duration_seconds {
            debug!(
                "Raised display duration from {}s to {}s",
                params.duration_seconds,
                duration.as_secs()
            );
        }

        self.state.notify(params.message, duration).await;

        Ok(ToolResult::to_server(MESSAGE_DISPLAYED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MissionError;
    use serde_json::json;

    fn setup() -> (ToolRegistry, StateManager) {
        let state = StateManager::new();
        let mut registry = ToolRegistry::new();
        attach_notification_tools(&mut registry, &state, &NotificationSettings::default());
        (registry, state)
    }

    async fn stored_ttl(state: &StateManager) -> Option<Duration> {
        state.transact(|_, notifications| notifications.current_ttl()).await
    }

    #[test]
    fn test_schema_descriptions() {
        let (registry, _) = setup();
        let schema = &registry.lookup(SHOW_MESSAGE).unwrap().schema;

        assert_eq!(
            schema.parameters.properties["message"].description,
            "Message to display to the user"
        );
        assert_eq!(
            schema.parameters.properties["duration_seconds"].description,
            "How long to display the message in seconds"
        );
    }

    #[tokio::test]
    async fn test_short_duration_is_raised_to_floor() {
        let (registry, state) = setup();

        let result = registry
            .invoke(SHOW_MESSAGE, json!({"message": "Hold on", "duration_seconds": 5}))
            .await
            .unwrap();

        assert_eq!(result.payload, MESSAGE_DISPLAYED);
        assert_eq!(stored_ttl(&state).await, Some(Duration::from_secs(20)));
    }

    #[tokio::test]
    async fn test_longer_duration_is_kept() {
        let (registry, state) = setup();

        registry
            .invoke(SHOW_MESSAGE, json!({"message": "T-minus 60", "duration_seconds": 60}))
            .await
            .unwrap();

        assert_eq!(stored_ttl(&state).await, Some(Duration::from_secs(60)));
        assert_eq!(state.current_message().await.unwrap().text, "T-minus 60");
    }

    #[tokio::test]
    async fn test_negative_duration_uses_floor() {
        let (registry, state) = setup();

        registry
            .invoke(SHOW_MESSAGE, json!({"message": "oops", "duration_seconds": -3}))
            .await
            .unwrap();

        assert_eq!(stored_ttl(&state).await, Some(Duration::from_secs(20)));
    }

    #[tokio::test]
    async fn test_configured_floor() {
        let state = StateManager::new();
        let mut registry = ToolRegistry::new();
        let settings = NotificationSettings {
            min_display_seconds: 3,
            ..NotificationSettings::default()
        };
        attach_notification_tools(&mut registry, &state, &settings);

        registry
            .invoke(SHOW_MESSAGE, json!({"message": "quick", "duration_seconds": 5}))
            .await
            .unwrap();

        assert_eq!(stored_ttl(&state).await, Some(Duration::from_secs(5)));
    }

    #[tokio::test]
    async fn test_duration_must_be_integer() {
        let (registry, _) = setup();

        let err = registry
            .invoke(SHOW_MESSAGE, json!({"message": "x", "duration_seconds": "ten"}))
            .await
            .unwrap_err();
        assert!(matches!(err, MissionError::InvalidArguments { .. }));
    }
}
