use chrono::Duration;
use skyward_rewards::config::{AppConfig, FIXTURE_PATH_VAR, POINTS_BALANCE_VAR};
use skyward_rewards::fixture::FlightStore;
use skyward_rewards::utils::error::AppError;
use std::collections::HashMap;
use std::path::PathBuf;

mod common {
    pub mod test_utils;
}
use common::test_utils::{skyward_store, test_offer};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn test_skyward_fixture() {
    let store = skyward_store();

    assert_eq!(store.len(), 3);
    let seattle = store.get("SEA-JFK-001").unwrap();
    assert_eq!(seattle.origin, "Seattle");
    assert_eq!(seattle.destination, "New York (JFK)");
    assert_eq!(seattle.duration_minutes, 320);
    assert_eq!(seattle.scheduled_minutes(), 320);
    assert_eq!(seattle.cash_price, 689);
    assert_eq!(seattle.points_price, 55200);
    assert_eq!(
        seattle.perks,
        vec!["2 checked bags", "Lounge access", "Priority boarding"]
    );

    let cancun = store.get("ATL-CUN-207").unwrap();
    assert_eq!(cancun.destination, "Cancún (CUN)");
    assert!(store.get("XXX-000").is_none());
}

#[test]
fn test_duration_mismatch_is_accepted() {
    // Advertised 640 minutes, the offsets put it at 690
    let store = skyward_store();
    let paris = store.get("SFO-CDG-101").unwrap();
    assert_eq!(paris.duration_minutes, 640);
    assert_eq!(paris.scheduled_minutes(), 690);
}

#[test]
fn test_arrival_before_departure_is_rejected() {
    let mut offer = test_offer("BAD-001", "Main", 1000);
    offer.arrival = offer.departure - Duration::minutes(30);

    let result = FlightStore::new(vec![offer]);
    assert!(matches!(result, Err(AppError::FixtureError(_))));
}

#[test]
fn test_empty_fields_are_rejected() {
    let mut offer = test_offer("BAD-002", "Main", 1000);
    offer.fare_class = String::new();

    let result = FlightStore::new(vec![offer]);
    assert!(matches!(result, Err(AppError::FixtureError(_))));
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let result = FlightStore::new(vec![
        test_offer("DUP-001", "Main", 1000),
        test_offer("DUP-001", "Business", 2000),
    ]);
    assert!(matches!(result, Err(AppError::FixtureError(_))));
}

#[test]
fn test_reserved_fare_class_is_rejected() {
    let result = FlightStore::new(vec![
        test_offer("RES-001", "Main", 1000),
        test_offer("RES-002", "All cabins", 2000),
    ]);
    assert!(matches!(result, Err(AppError::FixtureError(message)) if message.contains("RES-002")));

    // Only the exact sentinel is reserved
    assert!(FlightStore::new(vec![test_offer("RES-003", "all cabins", 2000)]).is_ok());
}

#[test]
fn test_malformed_json_is_rejected() {
    let result = FlightStore::from_json_str(r#"[{"id": "SEA-JFK-001"}]"#);
    assert!(matches!(result, Err(AppError::FixtureError(_))));

    let negative = FlightStore::from_json_str(
        r#"[{
            "id": "NEG-001",
            "origin": "A",
            "destination": "B",
            "departure": "2024-01-01T10:00:00+00:00",
            "arrival": "2024-01-01T11:00:00+00:00",
            "durationMinutes": -60,
            "fareClass": "Main",
            "cashPrice": 1,
            "pointsPrice": 1,
            "perks": []
        }]"#,
    );
    assert!(matches!(negative, Err(AppError::FixtureError(_))));
}

#[test]
fn test_missing_fixture_file() {
    let result = FlightStore::from_json_file(&PathBuf::from("/nonexistent/skyward.json"));
    assert!(matches!(result, Err(AppError::FixtureError(_))));
}

#[test]
fn test_config_defaults() -> Result<(), AppError> {
    let config = AppConfig::from_lookup(lookup(&[]))?;
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.points_balance, 120000);
    assert!(config.fixture_path.is_none());

    let store = config.load_store()?;
    assert_eq!(store, skyward_store());

    Ok(())
}

#[test]
fn test_config_overrides() -> Result<(), AppError> {
    let config = AppConfig::from_lookup(lookup(&[
        (POINTS_BALANCE_VAR, " 90000 "),
        (FIXTURE_PATH_VAR, "fixtures/skyward.json"),
    ]))?;

    assert_eq!(config.points_balance, 90000);
    assert_eq!(config.fixture_path, Some(PathBuf::from("fixtures/skyward.json")));

    // Tests run from the crate root
    let store = config.load_store()?;
    assert_eq!(store.len(), 3);

    Ok(())
}

#[test]
fn test_config_rejects_bad_balance() {
    let negative = AppConfig::from_lookup(lookup(&[(POINTS_BALANCE_VAR, "-5")]));
    assert!(matches!(negative, Err(AppError::ConfigError(_))));

    let words = AppConfig::from_lookup(lookup(&[(POINTS_BALANCE_VAR, "lots")]));
    assert!(matches!(words, Err(AppError::ConfigError(_))));
}
