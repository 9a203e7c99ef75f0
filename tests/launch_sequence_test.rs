//! End-to-end launch sequences driven through the tool registry

mod common;

use common::{call, mission_control};
use mission_control_core::mission::LAUNCH_CONFIRMATION;
use serde_json::json;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_full_launch_sequence() {
    let (registry, state) = mission_control();

    let rocket = call(&registry, "buy_rocket", json!({"rocket": "Falcon 9"})).await;
    assert_eq!(
        rocket,
        "Rocket selected: Falcon 9 with RP-1/LOX fuel and estimated cost of $67 million"
    );

    call(
        &registry,
        "select_launch_site",
        json!({"site": "Cape Canaveral Space Launch Complex, Florida"}),
    )
    .await;
    call(&registry, "buy_spacesuit", json!({"name": "Sokol Space Suit"})).await;
    let food = call(&registry, "buy_food", json!({"meals": "rice,protein bars"})).await;
    assert_eq!(food, "Food supplies purchased: rice,protein bars");

    let launch = call(&registry, "launch_rocket", json!({})).await;
    assert_eq!(launch, LAUNCH_CONFIRMATION);

    let snapshot = state.snapshot().await;
    assert!(snapshot.launched);
    assert_eq!(snapshot.fuel_type.as_deref(), Some("RP-1/LOX"));
    assert_eq!(snapshot.fuel_quantity, Some(287_000));
    assert_eq!(snapshot.estimated_cost.as_deref(), Some("$67 million"));

    let message = snapshot.user_message.unwrap();
    assert_eq!(message.text, "🚀 Rocket launched successfully!");
    assert_eq!(message.remaining, Duration::from_secs(15));

    // Relaunching re-checks and confirms again
    assert_eq!(
        call(&registry, "launch_rocket", json!({})).await,
        LAUNCH_CONFIRMATION
    );
}

#[tokio::test]
async fn test_gates_are_reported_in_order() {
    let (registry, state) = mission_control();

    let expected = [
        ("select_launch_site", json!({"site": "Baikonur Cosmodrome, Kazakhstan"}), "Launch site has not been selected."),
        ("buy_rocket", json!({"rocket": "Delta IV Heavy"}), "Rocket has not been selected."),
        ("buy_spacesuit", json!({"name": "Launch Entry Suit"}), "Spacesuit has not been selected."),
        ("buy_food", json!({"meals": "pasta"}), "Food supplies have not been purchased."),
    ];

    for (tool, args, blocker) in expected {
        let launch = call(&registry, "launch_rocket", json!({})).await;
        assert_eq!(launch, format!("Try again. Error: {}", blocker));
        assert!(!state.read_mission(|m| m.is_launched()).await);

        call(&registry, tool, args).await;
    }

    assert_eq!(
        call(&registry, "launch_rocket", json!({})).await,
        LAUNCH_CONFIRMATION
    );
}

#[tokio::test]
async fn test_site_gate_wins_when_everything_else_is_set() {
    let (registry, _) = mission_control();

    call(&registry, "buy_rocket", json!({"rocket": "SLS"})).await;
    call(&registry, "buy_spacesuit", json!({"name": "Orlan Space Suit"})).await;
    call(&registry, "buy_food", json!({"meals": "freeze-dried ice cream"})).await;

    assert_eq!(
        call(&registry, "launch_rocket", json!({})).await,
        "Try again. Error: Launch site has not been selected."
    );
}

#[tokio::test]
async fn test_unknown_rocket_degrades_to_fallback() {
    let (registry, state) = mission_control();

    let payload = call(&registry, "buy_rocket", json!({"rocket": "Saturn V"})).await;
    assert_eq!(
        payload,
        "Rocket selected: Saturn V with default specs - RP-1/LOX fuel and estimated cost of $150 million"
    );

    let snapshot = state.snapshot().await;
    assert_eq!(snapshot.rocket.as_deref(), Some("Saturn V"));
    assert_eq!(snapshot.fuel_quantity, Some(200_000));
    assert_eq!(snapshot.estimated_cost.as_deref(), Some("$150 million"));
    assert_eq!(
        snapshot.user_message.map(|m| m.text).as_deref(),
        Some("Rocket 'Saturn V' purchased.")
    );
}

#[tokio::test(start_paused = true)]
async fn test_action_notification_expires() {
    let (registry, state) = mission_control();

    call(&registry, "select_launch_site", json!({"site": "Rocket Lab Launch Complex 1, New Zealand"})).await;
    assert_eq!(
        state.current_message().await.unwrap().text,
        "Launch site 'Rocket Lab Launch Complex 1, New Zealand' selected."
    );

    tokio::time::advance(Duration::from_secs(9)).await;
    let message = state.current_message().await.unwrap();
    assert_eq!(message.remaining, Duration::from_secs(1));

    tokio::time::advance(Duration::from_secs(1)).await;
    assert!(state.current_message().await.is_none());

    // Mission state outlives the notification
    assert!(state.snapshot().await.launch_site.is_some());
}
