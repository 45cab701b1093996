use chrono::{DateTime, FixedOffset};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Sentinel cabin that disables fare-class filtering.
pub const ALL_CABINS: &str = "All cabins";

// A single reward flight offer as it appears in the fixture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_schedule"))]
pub struct FlightOffer {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub origin: String,
    #[validate(length(min = 1))]
    pub destination: String,
    pub departure: DateTime<FixedOffset>,
    pub arrival: DateTime<FixedOffset>,
    pub duration_minutes: u32,
    #[validate(length(min = 1))]
    pub fare_class: String,
    pub cash_price: u64,
    pub points_price: u64,
    pub perks: Vec<String>,
}

// Arrival must be a later instant than departure
fn validate_schedule(offer: &FlightOffer) -> Result<(), ValidationError> {
    if offer.arrival <= offer.departure {
        let mut err = ValidationError::new("schedule");
        err.message = Some(Cow::Owned(format!(
            "arrival {} is not after departure {}",
            offer.arrival.to_rfc3339(),
            offer.departure.to_rfc3339()
        )));
        return Err(err);
    }

    Ok(())
}

impl FlightOffer {
    /// Minutes between departure and arrival once both are normalized to UTC.
    pub fn scheduled_minutes(&self) -> i64 {
        self.arrival.signed_duration_since(self.departure).num_minutes()
    }
}

/// A flight offer plus the display labels derived from its raw fields.
///
/// Built fresh on every derivation pass, never written back to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DecoratedFlightOffer {
    #[serde(flatten)]
    pub offer: FlightOffer,
    pub departure_label: String,
    pub arrival_label: String,
    pub duration_label: String,
}

impl DecoratedFlightOffer {
    pub fn id(&self) -> &str {
        &self.offer.id
    }
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CabinOptionsResponse {
    pub cabins: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisibleFlightsResponse {
    pub selected_cabin: String,
    pub flights: Vec<DecoratedFlightOffer>,
}

// Structured payload handed to the offers widget
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(example = "OfferQueryResponse::example")]
pub struct OfferQueryResponse {
    pub flights: Vec<FlightOffer>,
    pub available_cabins: Vec<String>,
    pub selected_cabin: String,
}

impl OfferQueryResponse {
    pub fn example() -> Self {
        Self {
            flights: Vec::new(),
            available_cabins: vec![
                "Business Flex".to_string(),
                "Premium Select".to_string(),
                "SkyComfort".to_string(),
            ],
            selected_cabin: ALL_CABINS.to_string(),
        }
    }
}
