//! Mission state machine
//!
//! Tracks procurement decisions and gates the launch. Every setter overwrites
//! its field unconditionally; the only check in the whole machine happens in
//! [`MissionState::launch`], which walks the gating fields in a fixed order
//! and reports the first one that is missing.

use super::catalog;
use crate::types::RocketSpec;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Confirmation returned by a successful launch
pub const LAUNCH_CONFIRMATION: &str = "Launching rocket...";

/// First gating field found missing by [`MissionState::launch`]
///
/// Variants are declared in evaluation order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchBlocker {
    #[error("Try again. Error: Launch site has not been selected.")]
    LaunchSite,
    #[error("Try again. Error: Rocket has not been selected.")]
    Rocket,
    #[error("Try again. Error: Spacesuit has not been selected.")]
    Spacesuit,
    #[error("Try again. Error: Food supplies have not been purchased.")]
    FoodSupplies,
    #[error("Try again. Error: Fuel has not been purchased.")]
    Fuel,
}

/// Procurement and launch-readiness state for the single active mission
#[derive(Debug, Clone)]
pub struct MissionState {
    launch_site: Option<String>,
    rocket: Option<String>,
    estimated_cost: Option<String>,
    suit: Option<String>,
    food_supplies: Option<String>,
    fuel_type: Option<String>,
    fuel_quantity: Option<u64>,
    launched: bool,
    rocket_catalog: HashMap<String, RocketSpec>,
    fallback_spec: RocketSpec,
}

impl MissionState {
    /// Create an empty mission using the built-in rocket catalog
    pub fn new() -> Self {
        Self::with_catalog(catalog::rocket_specs(), catalog::fallback_spec())
    }

    /// Create an empty mission with a custom rocket catalog
    pub fn with_catalog(rocket_catalog: HashMap<String, RocketSpec>, fallback_spec: RocketSpec) -> Self {
        Self {
            launch_site: None,
            rocket: None,
            estimated_cost: None,
            suit: None,
            food_supplies: None,
            fuel_type: None,
            fuel_quantity: None,
            launched: false,
            rocket_catalog,
            fallback_spec,
        }
    }

    pub fn list_launch_sites(&self) -> Vec<String> {
        catalog::LAUNCH_SITES.iter().map(|s| s.to_string()).collect()
    }

    pub fn list_rockets(&self) -> Vec<String> {
        debug!("Listing all available space rockets");
        catalog::ROCKETS.iter().map(|s| s.to_string()).collect()
    }

    pub fn list_suits(&self) -> Vec<String> {
        debug!("Listing all available spacesuits");
        catalog::SUITS.iter().map(|s| s.to_string()).collect()
    }

    /// Select a launch site. Any value is accepted; it is not checked
    /// against the catalog.
    pub fn select_launch_site(&mut self, site: &str) -> String {
        self.launch_site = Some(site.to_string());
        debug!("Launch site set to: {}", site);
        format!("Launch site set to: {}", site)
    }

    pub fn purchase_suit(&mut self, name: &str) -> String {
        self.suit = Some(name.to_string());
        debug!("Spacesuit color selected: {}", name);
        format!("Spacesuit color selected: {}", name)
    }

    /// Record the meal list. The value is stored as given (typically a
    /// comma-separated list).
    pub fn purchase_food(&mut self, meals: &str) -> String {
        self.food_supplies = Some(meals.to_string());
        debug!("Food supplies purchased: {}", meals);
        format!("Food supplies purchased: {}", meals)
    }

    /// Buy `quantity` kilograms of `fuel_type`
    pub fn purchase_fuel(&mut self, fuel_type: &str, quantity: u64) -> String {
        self.fuel_type = Some(fuel_type.to_string());
        self.fuel_quantity = Some(quantity);
        debug!("{} kg of {} fuel purchased.", quantity, fuel_type);
        format!("{} kg of {} fuel purchased.", quantity, fuel_type)
    }

    pub fn set_estimated_cost(&mut self, cost: &str) -> String {
        self.estimated_cost = Some(cost.to_string());
        debug!("Estimated costs set to: {}", cost);
        format!("Estimated costs set to: {}", cost)
    }

    /// Purchase a rocket and cascade its fuel and cost.
    ///
    /// Unknown names never fail: the fallback spec is applied and the rocket
    /// is still recorded under the requested name.
    pub fn purchase_rocket(&mut self, rocket: &str) -> String {
        let (spec, known) = match self.rocket_spec(rocket) {
            Some(spec) => (spec.clone(), true),
            None => {
                warn!(
                    "No specifications found for {}. Using default specifications.",
                    rocket
                );
                (self.fallback_spec.clone(), false)
            }
        };

        self.rocket = Some(rocket.to_string());
        self.purchase_fuel(&spec.fuel_type, spec.fuel_quantity);
        self.set_estimated_cost(&spec.cost);

        if known {
            format!(
                "Rocket selected: {} with {} fuel and estimated cost of {}",
                rocket, spec.fuel_type, spec.cost
            )
        } else {
            format!(
                "Rocket selected: {} with default specs - {} fuel and estimated cost of {}",
                rocket, spec.fuel_type, spec.cost
            )
        }
    }

    /// Launch the rocket if every gating field is set.
    ///
    /// Gates are evaluated as launch site, rocket, spacesuit, food, fuel; the
    /// first missing one is returned. A missing estimated cost only logs a
    /// warning. Launching again after success re-runs the checks and
    /// confirms again.
    pub fn launch(&mut self) -> std::result::Result<&'static str, LaunchBlocker> {
        if let Err(blocker) = self.check_gates() {
            warn!("Launch blocked: {}", blocker);
            return Err(blocker);
        }

        self.launched = true;
        info!(
            "Launching {} from {}",
            self.rocket.as_deref().unwrap_or_default(),
            self.launch_site.as_deref().unwrap_or_default()
        );
        Ok(LAUNCH_CONFIRMATION)
    }

    fn check_gates(&self) -> std::result::Result<(), LaunchBlocker> {
        if !is_present(&self.launch_site) {
            return Err(LaunchBlocker::LaunchSite);
        }
        if !is_present(&self.rocket) {
            return Err(LaunchBlocker::Rocket);
        }
        if !is_present(&self.estimated_cost) {
            warn!("Estimated costs have not been set.");
        }
        if !is_present(&self.suit) {
            return Err(LaunchBlocker::Spacesuit);
        }
        if !is_present(&self.food_supplies) {
            return Err(LaunchBlocker::FoodSupplies);
        }
        if !is_present(&self.fuel_type) || self.fuel_quantity.is_none() {
            return Err(LaunchBlocker::Fuel);
        }
        Ok(())
    }

    pub fn launch_site(&self) -> Option<&str> {
        self.launch_site.as_deref()
    }

    pub fn rocket(&self) -> Option<&str> {
        self.rocket.as_deref()
    }

    pub fn estimated_cost(&self) -> Option<&str> {
        self.estimated_cost.as_deref()
    }

    pub fn suit(&self) -> Option<&str> {
        self.suit.as_deref()
    }

    pub fn food_supplies(&self) -> Option<&str> {
        self.food_supplies.as_deref()
    }

    pub fn fuel_type(&self) -> Option<&str> {
        self.fuel_type.as_deref()
    }

    pub fn fuel_quantity(&self) -> Option<u64> {
        self.fuel_quantity
    }

    pub fn is_launched(&self) -> bool {
        self.launched
    }

    /// Spec applied to rockets missing from the catalog
    pub fn fallback_spec(&self) -> &RocketSpec {
        &self.fallback_spec
    }

    /// Spec for a catalogued rocket
    pub fn rocket_spec(&self, rocket: &str) -> Option<&RocketSpec> {
        self.rocket_catalog.get(rocket)
    }
}

impl Default for MissionState {
    fn default() -> Self {
        Self::new()
    }
}

// Blank strings count as unset at the launch gate.
fn is_present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPE: &str = "Cape Canaveral Space Launch Complex, Florida";

    fn ready_except_site() -> MissionState {
        let mut mission = MissionState::new();
        mission.purchase_rocket("Falcon 9");
        mission.purchase_suit("Sokol Space Suit");
        mission.purchase_food("rice,protein bars");
        mission
    }

    #[test]
    fn test_known_rocket_cascades_catalog_spec() {
        let mut mission = MissionState::new();
        let message = mission.purchase_rocket("Falcon Heavy");

        assert_eq!(
            message,
            "Rocket selected: Falcon Heavy with RP-1/LOX fuel and estimated cost of $97 million"
        );
        assert_eq!(mission.rocket(), Some("Falcon Heavy"));
        assert_eq!(mission.fuel_type(), Some("RP-1/LOX"));
        assert_eq!(mission.fuel_quantity(), Some(478_000));
        assert_eq!(mission.estimated_cost(), Some("$97 million"));
    }

    #[test]
    fn test_unknown_rocket_falls_back() {
        let mut mission = MissionState::new();
        let message = mission.purchase_rocket("Saturn V");

        assert_eq!(
            message,
            "Rocket selected: Saturn V with default specs - RP-1/LOX fuel and estimated cost of $150 million"
        );
        assert_eq!(mission.rocket(), Some("Saturn V"));
        assert_eq!(mission.fuel_quantity(), Some(200_000));
        assert_eq!(mission.estimated_cost(), Some("$150 million"));
    }

    #[test]
    fn test_rocket_lookup_is_case_sensitive() {
        let mut mission = MissionState::new();
        mission.purchase_rocket("falcon 9");
        assert_eq!(mission.fuel_quantity(), Some(200_000));
    }

    #[test]
    fn test_selection_accepts_any_site() {
        let mut mission = MissionState::new();
        let message = mission.select_launch_site("Backyard, Ohio");
        assert_eq!(message, "Launch site set to: Backyard, Ohio");
        assert_eq!(mission.launch_site(), Some("Backyard, Ohio"));
    }

    #[test]
    fn test_later_purchase_overwrites_cascade() {
        let mut mission = MissionState::new();
        mission.purchase_rocket("Starship");
        let message = mission.purchase_fuel("Hydrazine", 1_000);

        assert_eq!(message, "1000 kg of Hydrazine fuel purchased.");
        assert_eq!(mission.fuel_type(), Some("Hydrazine"));
        assert_eq!(mission.estimated_cost(), Some("$200 million"));
    }

    #[test]
    fn test_launch_checks_site_first() {
        let mut mission = ready_except_site();
        assert_eq!(mission.launch(), Err(LaunchBlocker::LaunchSite));
        assert!(!mission.is_launched());
    }

    #[test]
    fn test_launch_checks_rocket_second() {
        let mut mission = MissionState::new();
        mission.select_launch_site(CAPE);
        assert_eq!(mission.launch(), Err(LaunchBlocker::Rocket));
    }

    #[test]
    fn test_launch_gate_order() {
        let mut mission = MissionState::new();
        assert_eq!(mission.launch(), Err(LaunchBlocker::LaunchSite));

        mission.select_launch_site(CAPE);
        mission.set_estimated_cost("$1");
        mission.purchase_fuel("RP-1/LOX", 10);
        mission.purchase_food("soup");
        assert_eq!(mission.launch(), Err(LaunchBlocker::Rocket));

        mission.rocket = Some("Atlas V".to_string());
        assert_eq!(mission.launch(), Err(LaunchBlocker::Spacesuit));

        mission.purchase_suit("Orlan Space Suit");
        mission.food_supplies = None;
        assert_eq!(mission.launch(), Err(LaunchBlocker::FoodSupplies));

        mission.purchase_food("soup");
        mission.fuel_quantity = None;
        assert_eq!(mission.launch(), Err(LaunchBlocker::Fuel));

        mission.purchase_fuel("RP-1/LOX", 10);
        assert_eq!(mission.launch(), Ok(LAUNCH_CONFIRMATION));
    }

    #[test]
    fn test_missing_cost_does_not_block() {
        let mut mission = MissionState::new();
        mission.select_launch_site(CAPE);
        mission.rocket = Some("Ariane 5".to_string());
        mission.purchase_suit("Launch Entry Suit");
        mission.purchase_food("pasta");
        mission.purchase_fuel("Liquid Hydrogen/LOX", 170_000);

        assert!(mission.estimated_cost().is_none());
        assert_eq!(mission.launch(), Ok(LAUNCH_CONFIRMATION));
        assert!(mission.is_launched());
    }

    #[test]
    fn test_blank_field_counts_as_missing() {
        let mut mission = ready_except_site();
        mission.select_launch_site("   ");
        assert_eq!(mission.launch(), Err(LaunchBlocker::LaunchSite));
    }

    #[test]
    fn test_relaunch_is_idempotent() {
        let mut mission = ready_except_site();
        mission.select_launch_site(CAPE);

        assert_eq!(mission.launch(), Ok(LAUNCH_CONFIRMATION));
        assert_eq!(mission.launch(), Ok(LAUNCH_CONFIRMATION));
        assert!(mission.is_launched());
    }

    #[test]
    fn test_blocker_messages() {
        assert_eq!(
            LaunchBlocker::LaunchSite.to_string(),
            "Try again. Error: Launch site has not been selected."
        );
        assert_eq!(
            LaunchBlocker::FoodSupplies.to_string(),
            "Try again. Error: Food supplies have not been purchased."
        );
        assert_eq!(
            LaunchBlocker::Fuel.to_string(),
            "Try again. Error: Fuel has not been purchased."
        );
    }

    #[test]
    fn test_catalog_listings() {
        let mission = MissionState::new();
        assert_eq!(mission.list_launch_sites().len(), 5);
        assert_eq!(mission.list_rockets(), vec!["Ariane 5", "Falcon 9", "Atlas V"]);
        assert!(mission.list_suits().contains(&"Sokol Space Suit".to_string()));
    }

    #[test]
    fn test_suit_confirmation() {
        let mut mission = MissionState::new();
        let message = mission.purchase_suit("Orlan Space Suit");
        assert_eq!(message, "Spacesuit color selected: Orlan Space Suit");
        assert_eq!(mission.suit(), Some("Orlan Space Suit"));
    }

    #[test]
    fn test_rocket_spec_lookup() {
        let mission = MissionState::new();
        assert_eq!(mission.rocket_spec("SLS").map(|s| s.fuel_quantity), Some(730_000));
        assert!(mission.rocket_spec("Ariane 5").is_none());
        assert_eq!(mission.fallback_spec().cost, "$150 million");
    }
}
