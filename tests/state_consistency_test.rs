//! Snapshot consistency while tools are writing

mod common;

use common::mission_control;
use mission_control_core::MissionState;
use serde_json::json;

const ROUNDS: usize = 500;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_snapshots_never_see_partial_rocket_cascade() {
    let (registry, state) = mission_control();
    let catalog = MissionState::new();

    let writer = tokio::spawn(async move {
        for round in 0..ROUNDS {
            let rocket = if round % 2 == 0 { "Starship" } else { "Saturn V" };
            registry
                .invoke("buy_rocket", json!({ "rocket": rocket }))
                .await
                .unwrap();
            tokio::task::yield_now().await;
        }
    });

    let reader_state = state.clone();
    let reader = tokio::spawn(async move {
        for _ in 0..ROUNDS {
            let snapshot = reader_state.snapshot().await;
            if let Some(rocket) = snapshot.rocket.as_deref() {
                let spec = catalog
                    .rocket_spec(rocket)
                    .unwrap_or_else(|| catalog.fallback_spec());

                assert_eq!(snapshot.fuel_type.as_deref(), Some(spec.fuel_type.as_str()), "{}", rocket);
                assert_eq!(snapshot.fuel_quantity, Some(spec.fuel_quantity), "{}", rocket);
                assert_eq!(snapshot.estimated_cost.as_deref(), Some(spec.cost.as_str()), "{}", rocket);
            }
            tokio::task::yield_now().await;
        }
    });

    writer.await.unwrap();
    reader.await.unwrap();

    let snapshot = state.snapshot().await;
    assert_eq!(snapshot.rocket.as_deref(), Some("Saturn V"));
    assert_eq!(snapshot.fuel_quantity, Some(200_000));
}
