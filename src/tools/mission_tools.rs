//! Mission tools
//!
//! Each handler runs its mission operation and then records a short
//! notification describing what happened, both inside one critical section.
//! The operation's confirmation string is returned to the engine.

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

pub const SELECT_LAUNCH_SITE: &str = "select_launch_site";
pub const BUY_FOOD: &str = "buy_food";
pub const BUY_ROCKET: &str = "buy_rocket";
pub const BUY_SPACESUIT: &str = "buy_spacesuit";
pub const LAUNCH_ROCKET: &str = "launch_rocket";

/// Notification shown after a successful launch
pub const LAUNCH_SUCCESS_NOTICE: &str = "🚀 Rocket launched successfully!";

/// Register the mission tools against `state`
pub fn attach_mission_tools(
    registry: &mut ToolRegistry,
    state: &StateManager,
    settings: &NotificationSettings,
) {
    let action_ttl = settings.action_ttl();

    registry.register(
        SELECT_LAUNCH_SITE,
        CallSchema::function(SELECT_LAUNCH_SITE, "Select a specific launch site for the mission")
            .param("site", ParamType::String, "Name of the launch site to select"),
        Arc::new(SelectLaunchSite {
            state: state.clone(),
            ttl: action_ttl,
        }),
    );

    registry.register(
        BUY_FOOD,
        CallSchema::function(BUY_FOOD, "Purchase food supplies for the mission")
            .param("meals", ParamType::String, "Comma-separated list of meals"),
        Arc::new(BuyFood {
            state: state.clone(),
            ttl: action_ttl,
        }),
    );

    registry.register(
        BUY_ROCKET,
        CallSchema::function(BUY_ROCKET, "Select and purchase a rocket for the mission")
            .param("rocket", ParamType::String, "Name of the rocket to purchase"),
        Arc::new(BuyRocket {
            state: state.clone(),
            ttl: action_ttl,
        }),
    );

    registry.register(
        BUY_SPACESUIT,
        CallSchema::function(BUY_SPACESUIT, "Select and purchase a spacesuit")
            .param("name", ParamType::String, "Name of the spacesuit to purchase"),
        Arc::new(BuySpacesuit {
            state: state.clone(),
            ttl: action_ttl,
        }),
    );

    registry.register(
        LAUNCH_ROCKET,
        CallSchema::function(LAUNCH_ROCKET, "Launch the rocket if all conditions are met"),
        Arc::new(LaunchRocket {
            state: state.clone(),
            ttl: settings.launch_ttl(),
        }),
    );
}

struct SelectLaunchSite {
    state: StateManager,
    ttl: Duration,
}

#[async_trait]
impl ToolHandler for SelectLaunchSite {
    async fn invoke(&self, args: Value) -> Result<ToolResult> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Params {
            site: String,
        }

        let params: Params = decode_args(SELECT_LAUNCH_SITE, args)?;
        let ttl = self.ttl;

        let payload = self
            .state
            .transact(|mission, notifications| {
                let result = mission.select_launch_site(&params.site);
                notifications.set_message(format!("Launch site '{}' selected.", params.site), ttl);
                result
            })
            .await;

        Ok(ToolResult::to_server(payload))
    }
}

struct BuyFood {
    state: StateManager,
    ttl: Duration,
}

#[async_trait]
impl ToolHandler for BuyFood {
    async fn invoke(&self, args: Value) -> Result<ToolResult> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Params {
            meals: String,
        }

        let params: Params = decode_args(BUY_FOOD, args)?;
        let ttl = self.ttl;

        let payload = self
            .state
            .transact(|mission, notifications| {
                let result = mission.purchase_food(&params.meals);
                notifications.set_message(format!("Food supplies purchased: {}", params.meals), ttl);
                result
            })
            .await;

        Ok(ToolResult::to_server(payload))
    }
}

struct BuyRocket {
    state: StateManager,
    ttl: Duration,
}

#[async_trait]
impl ToolHandler for BuyRocket {
    async fn invoke(&self, args: Value) -> Result<ToolResult> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Params {
            rocket: String,
        }

        let params: Params = decode_args(BUY_ROCKET, args)?;
        let ttl = self.ttl;

        // Rocket, fuel and cost land together under the mission write lock
        let payload = self
            .state
            .transact(|mission, notifications| {
                let result = mission.purchase_rocket(&params.rocket);
                notifications.set_message(format!("Rocket '{}' purchased.", params.rocket), ttl);
                result
            })
            .await;

        Ok(ToolResult::to_server(payload))
    }
}

struct BuySpacesuit {
    state: StateManager,
    ttl: Duration,
}

#[async_trait]
impl ToolHandler for BuySpacesuit {
    async fn invoke(&self, args: Value) -> Result<ToolResult> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Params {
            name: String,
        }

        let params: Params = decode_args(BUY_SPACESUIT, args)?;
        let ttl = self.ttl;

        let payload = self
            .state
            .transact(|mission, notifications| {
                let result = mission.purchase_suit(&params.name);
                notifications.set_message(format!("Spacesuit '{}' purchased.", params.name), ttl);
                result
            })
            .await;

        Ok(ToolResult::to_server(payload))
    }
}

struct LaunchRocket {
    state: StateManager,
    ttl: Duration,
}

#[async_trait]
impl ToolHandler for LaunchRocket {
    async fn invoke(&self, args: Value) -> Result<ToolResult> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Params {}

        let _: Params = decode_args(LAUNCH_ROCKET, args)?;
        let ttl = self.ttl;

        let payload = self
            .state
            .transact(|mission, notifications| match mission.launch() {
                Ok(confirmation) => {
                    notifications.set_message(LAUNCH_SUCCESS_NOTICE, ttl);
                    confirmation.to_string()
                }
                Err(blocker) => {
                    let message = blocker.to_string();
                    notifications.set_message(format!("⚠️ {}", message), ttl);
                    message
                }
            })
            .await;

        Ok(ToolResult::to_server(payload))
    }
}
