use crate::models::flight::{DecoratedFlightOffer, ALL_CABINS};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

// Screen currently shown to the traveller
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Screen {
    Browse,
    Auth,
    Checkout,
}

/// Snapshot of everything the presentation layer needs to draw a screen.
///
/// `selected_flight` is `None` exactly while `screen` is `Browse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub screen: Screen,
    pub selected_cabin: String,
    pub selected_flight: Option<DecoratedFlightOffer>,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub auth_error: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            screen: Screen::Browse,
            selected_cabin: ALL_CABINS.to_string(),
            selected_flight: None,
            username: String::new(),
            password: String::new(),
            auth_error: None,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SelectCabinRequest {
    pub cabin: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub flight_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

// Values shown on the checkout screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub flight: DecoratedFlightOffer,
    pub points_balance: u64,
    pub points_price: u64,
    #[schemars(title = "Balance after booking")]
    pub remaining_points: i64,
    pub remaining_label: String,
    #[schemars(title = "Cash comparison")]
    pub cash_label: String,
    pub sufficient_points: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(example = "BookingConfirmation::example")]
pub struct BookingConfirmation {
    pub message: String,
    pub flight_id: String,
    pub points_spent: u64,
    pub remaining_points: i64,
}

impl BookingConfirmation {
    pub fn example() -> Self {
        Self {
            message: "Demo checkout complete! Returning to flight search.".to_string(),
            flight_id: "SFO-CDG-101".to_string(),
            points_spent: 86400,
            remaining_points: 33600,
        }
    }
}
