//! System instructions handed to the conversational engine
//!
//! The engine is responsible for transmitting the text; this module only
//! assembles it from the mission catalogs.

use super::MissionState;

/// Default persona and procedure for the launch assistant
pub const DEFAULT_BRIEFING: &str = "\
Start by greeting the user, the Captain. Ask if they are ready to launch the rocket.
If the user immediately wants to launch without selecting a rocket first, make a joke asking if the user has read the manual. Before launching, ask the user to confirm, then do a count-down.

You must show a high fidelity HTML-based option menu using the show_message function before every message to the user (With all available options encoded as HTML with UL/LI) for the following commands:
Step 1) Selection of launch site
Step 2) Selection of rocket
Step 3) Selection of spacesuit
Step 4) Purchase of food supplies

(use Emojis to indicate current selection progress. Also use the menu to list available options (e.g. available rockets))";

/// Append the available launch sites, rockets and spacesuits to `base`
pub fn compose(base: &str, mission: &MissionState) -> String {
    format!(
        "{}\n\nHere are the available options:\n{}",
        base.trim_end(),
        available_options(mission)
    )
}

/// The catalog block on its own, one line per catalog
pub fn available_options(mission: &MissionState) -> String {
    format!(
        "Available launch sites: {}\nAvailable rockets: {}\nAvailable spacesuits: {}\n",
        mission.list_launch_sites().join(", "),
        mission.list_rockets().join(", "),
        mission.list_suits().join(", ")
    )
}
