//! Fixed procurement catalogs
//!
//! The advertised lists are what the assistant offers to the user. The rocket
//! specification table is what purchases cascade from; the two are not
//! required to agree, and names outside either are still accepted.

use crate::types::RocketSpec;
use std::collections::HashMap;

/// Launch sites offered to the user
pub const LAUNCH_SITES: &[&str] = &[
    "Guiana Space Centre, French Guiana",
    "Baikonur Cosmodrome, Kazakhstan",
    "Vandenberg Space Force Base, USA",
    "Rocket Lab Launch Complex 1, New Zealand",
    "Cape Canaveral Space Launch Complex, Florida",
];

/// Rockets offered to the user
pub const ROCKETS: &[&str] = &["Ariane 5", "Falcon 9", "Atlas V"];

/// Spacesuits offered to the user
pub const SUITS: &[&str] = &[
    "Advanced Crew Escape Suit",
    "Sokol Space Suit",
    "Orlan Space Suit",
    "Launch Entry Suit",
];

/// Rocket specifications keyed by exact (case-sensitive) rocket name
pub fn rocket_specs() -> HashMap<String, RocketSpec> {
    [
        ("Falcon 9", RocketSpec::new("RP-1/LOX", 287_000, "$67 million")),
        ("Falcon Heavy", RocketSpec::new("RP-1/LOX", 478_000, "$97 million")),
        (
            "Starship",
            RocketSpec::new("Liquid Methane/LOX", 3_400_000, "$200 million"),
        ),
        ("SLS", RocketSpec::new("Liquid Hydrogen/LOX", 730_000, "$2 billion")),
        (
            "Delta IV Heavy",
            RocketSpec::new("Liquid Hydrogen/LOX", 465_000, "$350 million"),
        ),
    ]
    .into_iter()
    .map(|(name, spec)| (name.to_string(), spec))
    .collect()
}

/// Spec applied when a rocket is not in the table
pub fn fallback_spec() -> RocketSpec {
    RocketSpec::new("RP-1/LOX", 200_000, "$150 million")
}
