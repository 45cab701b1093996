#![allow(dead_code)]

use chrono::{DateTime, Duration};
use rocket::local::asynchronous::Client;
use skyward_rewards::build_rocket;
use skyward_rewards::fixture::FlightStore;
use skyward_rewards::models::flight::FlightOffer;
use skyward_rewards::services::flight_service::FlightService;
use skyward_rewards::services::session_service::{SessionService, DEFAULT_POINTS_BALANCE};
use std::sync::Arc;

// The built-in Skyward offers
pub fn skyward_store() -> FlightStore {
    FlightStore::skyward().expect("built-in fixture must load")
}

// A well-formed offer departing at 08:00 UTC for two hours
pub fn test_offer(id: &str, fare_class: &str, points_price: u64) -> FlightOffer {
    let departure = DateTime::parse_from_rfc3339("2024-05-01T08:00:00+00:00").unwrap();
    FlightOffer {
        id: id.to_string(),
        origin: "Toronto".to_string(),
        destination: "Ottawa".to_string(),
        departure,
        arrival: departure + Duration::minutes(120),
        duration_minutes: 120,
        fare_class: fare_class.to_string(),
        cash_price: 250,
        points_price,
        perks: vec!["Carry-on bag".to_string()],
    }
}

pub fn store_of(offers: Vec<FlightOffer>) -> FlightStore {
    FlightStore::new(offers).expect("test offers must be valid")
}

pub fn flight_service(store: FlightStore) -> FlightService {
    FlightService::new(Arc::new(store))
}

pub fn skyward_session() -> SessionService {
    SessionService::new(flight_service(skyward_store()), DEFAULT_POINTS_BALANCE)
}

pub fn session_with(store: FlightStore, points_balance: u64) -> SessionService {
    SessionService::new(flight_service(store), points_balance)
}

// Drive a fresh session into checkout for the given flight
pub fn session_in_checkout(store: FlightStore, flight_id: &str) -> SessionService {
    let mut session = session_with(store, DEFAULT_POINTS_BALANCE);
    session
        .request_checkout(flight_id)
        .expect("flight must be visible");
    session
        .submit_credentials("test", "testpass")
        .expect("demo credentials must be accepted");
    session
}

pub async fn test_client() -> Client {
    Client::tracked(build_rocket(skyward_store(), DEFAULT_POINTS_BALANCE))
        .await
        .expect("valid rocket instance")
}
