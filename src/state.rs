//! Shared ownership of the mission and notification stores
//!
//! One [`StateManager`] is created at startup and cloned into every tool
//! handler and status surface. Locks are always taken mission first, then
//! notifications.

use crate::mission::MissionState;
use crate::notification::NotificationStore;
use crate::types::ActiveNotification;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Handle to the process-wide mission and notification stores
#[derive(Clone, Default)]
pub struct StateManager {
    mission: Arc<RwLock<MissionState>>,
    notifications: Arc<RwLock<NotificationStore>>,
}

impl StateManager {
    /// Create a state manager over fresh stores
    pub fn new() -> Self {
        Self {
            mission: Arc::new(RwLock::new(MissionState::new())),
            notifications: Arc::new(RwLock::new(NotificationStore::new())),
        }
    }

    /// Run `f` with exclusive access to both stores.
    ///
    /// Readers never observe a state where only part of `f`'s writes have
    /// been applied.
    pub async fn transact<R>(
        &self,
        f: impl FnOnce(&mut MissionState, &mut NotificationStore) -> R,
    ) -> R {
        let mut mission = self.mission.write().await;
        let mut notifications = self.notifications.write().await;
        f(&mut *mission, &mut *notifications)
    }

    /// Read the mission without touching notifications
    pub async fn read_mission<R>(&self, f: impl FnOnce(&MissionState) -> R) -> R {
        let mission = self.mission.read().await;
        f(&*mission)
    }

    /// Replace the current notification
    pub async fn notify(&self, message: impl Into<String>, ttl: Duration) {
        let mut notifications = self.notifications.write().await;
        notifications.set_message(message, ttl);
    }

    /// Current notification, expiring it if its time is up
    pub async fn current_message(&self) -> Option<ActiveNotification> {
        let mut notifications = self.notifications.write().await;
        notifications.current_message()
    }

    /// Consistent view of every mission field plus the current notification
    pub async fn snapshot(&self) -> StateSnapshot {
        let mission = self.mission.read().await;
        let mut notifications = self.notifications.write().await;

        StateSnapshot {
            launch_site: mission.launch_site().map(str::to_string),
            rocket: mission.rocket().map(str::to_string),
            estimated_cost: mission.estimated_cost().map(str::to_string),
            suit: mission.suit().map(str::to_string),
            food_supplies: mission.food_supplies().map(str::to_string),
            fuel_type: mission.fuel_type().map(str::to_string),
            fuel_quantity: mission.fuel_quantity(),
            launched: mission.is_launched(),
            user_message: notifications.current_message(),
        }
    }
}

/// Point-in-time view served to status readers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSnapshot {
    #[serde(rename = "selected_launch_site")]
    pub launch_site: Option<String>,
    #[serde(rename = "selected_rocket")]
    pub rocket: Option<String>,
    pub estimated_cost: Option<String>,
    #[serde(rename = "selected_suit")]
    pub suit: Option<String>,
    pub food_supplies: Option<String>,
    pub fuel_type: Option<String>,
    pub fuel_quantity: Option<u64>,
    pub launched: bool,
    pub user_message: Option<ActiveNotification>,
}
