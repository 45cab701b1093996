use crate::models::flight::{FlightOffer, ALL_CABINS};
use crate::utils::error::{AppError, AppResult};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use validator::Validate;

const SKYWARD_FIXTURE: &str = include_str!("../fixtures/skyward.json");

// Read-only flight data source, injected into the services at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightStore {
    offers: Vec<FlightOffer>,
}

impl FlightStore {
    // Validate and wrap a list of offers, keeping their order
    pub fn new(offers: Vec<FlightOffer>) -> AppResult<Self> {
        let mut seen = HashSet::new();

        for offer in &offers {
            offer
                .validate()
                .map_err(|e| AppError::FixtureError(format!("{}: {}", offer.id, e)))?;

            if !seen.insert(offer.id.as_str()) {
                return Err(AppError::FixtureError(format!(
                    "duplicate flight id {}",
                    offer.id
                )));
            }

            // The sentinel would swallow this cabin in the filter options
            if offer.fare_class == ALL_CABINS {
                return Err(AppError::FixtureError(format!(
                    "{}: fare class {:?} is reserved",
                    offer.id, ALL_CABINS
                )));
            }

            let scheduled = offer.scheduled_minutes();
            if scheduled != i64::from(offer.duration_minutes) {
                tracing::warn!(
                    flight = %offer.id,
                    advertised = offer.duration_minutes,
                    scheduled,
                    "advertised duration differs from the departure/arrival gap"
                );
            }
        }

        Ok(FlightStore { offers })
    }

    // The built-in Skyward Rewards offers
    pub fn skyward() -> AppResult<Self> {
        Self::from_json_str(SKYWARD_FIXTURE)
    }

    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let offers: Vec<FlightOffer> = serde_json::from_str(json)?;
        Self::new(offers)
    }

    pub fn from_json_file(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| AppError::FixtureError(format!("{}: {}", path.display(), e)))?;
        let store = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), offers = store.len(), "loaded flight fixture");
        Ok(store)
    }

    pub fn offers(&self) -> &[FlightOffer] {
        &self.offers
    }

    pub fn get(&self, id: &str) -> Option<&FlightOffer> {
        self.offers.iter().find(|offer| offer.id == id)
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}
