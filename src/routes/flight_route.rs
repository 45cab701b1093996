use crate::models::flight::{CabinOptionsResponse, OfferQueryResponse, VisibleFlightsResponse};
use crate::routes::SharedSession;
use crate::services::flight_service::FlightService;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

/// Cabin filter options, "All cabins" first
#[openapi(tag = "Flights")]
#[get("/cabins")]
pub async fn list_cabins(flight_service: &State<FlightService>) -> Json<CabinOptionsResponse> {
    Json(CabinOptionsResponse {
        cabins: flight_service.cabin_options().to_vec(),
    })
}

/// Decorated flights for the cabin currently selected in the session
#[openapi(tag = "Flights")]
#[get("/flights")]
pub async fn visible_flights(session: &State<SharedSession>) -> Json<VisibleFlightsResponse> {
    let session = session.lock().await;
    Json(VisibleFlightsResponse {
        selected_cabin: session.view_state().selected_cabin.clone(),
        flights: session.visible_flights().to_vec(),
    })
}

/// Raw offers for the widget, optionally filtered by cabin (case-insensitive)
#[openapi(tag = "Flights")]
#[get("/offers?<fare_cabin>")]
pub async fn query_offers(
    fare_cabin: Option<String>,
    flight_service: &State<FlightService>,
) -> Json<OfferQueryResponse> {
    Json(flight_service.query_offers(fare_cabin.as_deref()))
}
