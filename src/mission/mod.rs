//! Mission procurement and launch gating
//!
//! - `catalog`: advertised launch sites, rockets, spacesuits and rocket specs
//! - `state`: the mission state machine
//! - `briefing`: system instructions built from the catalogs

pub mod briefing;
pub mod catalog;
pub mod state;

pub use state::{LaunchBlocker, MissionState, LAUNCH_CONFIRMATION};
