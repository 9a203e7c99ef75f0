//! Core value types shared between the mission state, the notification store
//! and the status surfaces.

use serde::{Deserialize, Serialize, Serializer};
use std::time::Duration;

/// Fuel and cost profile attached to a rocket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RocketSpec {
    /// Propellant combination (e.g., "RP-1/LOX")
    pub fuel_type: String,
    /// Propellant mass in kilograms
    pub fuel_quantity: u64,
    /// Human-readable price estimate (e.g., "$67 million")
    pub cost: String,
}

impl RocketSpec {
    pub fn new(fuel_type: impl Into<String>, fuel_quantity: u64, cost: impl Into<String>) -> Self {
        Self {
            fuel_type: fuel_type.into(),
            fuel_quantity,
            cost: cost.into(),
        }
    }
}

/// A notification that is still within its time-to-live
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveNotification {
    /// Message text shown to the viewer
    pub text: String,
    /// Time left before the message expires
    #[serde(rename = "remaining_seconds", serialize_with = "serialize_seconds")]
    pub remaining: Duration,
}

fn serialize_seconds<S>(duration: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(duration.as_secs_f64())
}
