//! Print the assistant's system instructions

use mission_control_core::{config::MissionConfig, mission::briefing, MissionState};

pub fn handle(config: &MissionConfig) {
    let mission = MissionState::new();
    println!("{}", briefing::compose(&config.briefing.instructions, &mission));
}
