#[macro_use]
extern crate rocket;

pub mod config;
pub mod fixture;
pub mod models;
pub mod routes;
pub mod services;
pub mod swagger;
pub mod utils;

use crate::fixture::FlightStore;
use crate::services::flight_service::FlightService;
use crate::services::session_service::SessionService;
use crate::swagger::swagger_ui;
use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};
use rocket_okapi::openapi_get_routes;
use rocket_okapi::swagger_ui::make_swagger_ui;
use std::sync::Arc;
use tokio::sync::Mutex;

// Assemble the server around an injected fixture; used by main and the HTTP tests
pub fn build_rocket(store: FlightStore, points_balance: u64) -> Rocket<Build> {
    let flight_service = FlightService::new(Arc::new(store));
    let session_service = SessionService::new(flight_service.clone(), points_balance);

    rocket::build()
        .manage(flight_service)
        .manage(Mutex::new(session_service))
        .mount(
            "/api",
            openapi_get_routes![
                routes::flight_route::list_cabins,
                routes::flight_route::visible_flights,
                routes::flight_route::query_offers,
                routes::session_route::view_state,
                routes::session_route::select_cabin,
                routes::session_route::request_checkout,
                routes::session_route::submit_credentials,
                routes::session_route::cancel_auth,
                routes::session_route::cancel_checkout,
                routes::session_route::checkout_summary,
                routes::session_route::confirm_booking,
            ],
        )
        .mount("/swagger", make_swagger_ui(&swagger_ui()))
        .attach(AdHoc::on_response("CORS", |_, res| {
            Box::pin(async move {
                res.set_header(rocket::http::Header::new(
                    "Access-Control-Allow-Origin",
                    "*",
                ));
            })
        }))
}
