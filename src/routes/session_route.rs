use crate::models::session::{
    BookingConfirmation, CheckoutRequest, CheckoutSummary, CredentialsRequest,
    SelectCabinRequest, ViewState,
};
use crate::routes::SharedSession;
use crate::utils::error::AppError;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

/// Current view state (password omitted)
#[openapi(tag = "Session")]
#[get("/session")]
pub async fn view_state(session: &State<SharedSession>) -> Json<ViewState> {
    Json(session.lock().await.view_state().clone())
}

/// Change the cabin filter
#[openapi(tag = "Session")]
#[post("/session/cabin", format = "json", data = "<request>")]
pub async fn select_cabin(
    request: Json<SelectCabinRequest>,
    session: &State<SharedSession>,
) -> Result<Json<ViewState>, AppError> {
    let mut session = session.lock().await;
    session.select_cabin(&request.cabin)?;
    Ok(Json(session.view_state().clone()))
}

/// Pick a visible flight and move to sign-in
#[openapi(tag = "Session")]
#[post("/session/checkout", format = "json", data = "<request>")]
pub async fn request_checkout(
    request: Json<CheckoutRequest>,
    session: &State<SharedSession>,
) -> Result<Json<ViewState>, AppError> {
    let mut session = session.lock().await;
    session.request_checkout(&request.flight_id)?;
    Ok(Json(session.view_state().clone()))
}

/// Sign in with the demo credentials
#[openapi(tag = "Session")]
#[post("/session/login", format = "json", data = "<request>")]
pub async fn submit_credentials(
    request: Json<CredentialsRequest>,
    session: &State<SharedSession>,
) -> Result<Json<ViewState>, AppError> {
    let request = request.into_inner();
    let mut session = session.lock().await;
    session.submit_credentials(&request.username, &request.password)?;
    Ok(Json(session.view_state().clone()))
}

/// Leave the sign-in screen
#[openapi(tag = "Session")]
#[post("/session/auth/cancel")]
pub async fn cancel_auth(session: &State<SharedSession>) -> Result<Json<ViewState>, AppError> {
    let mut session = session.lock().await;
    session.cancel_auth()?;
    Ok(Json(session.view_state().clone()))
}

/// Leave the checkout screen without booking
#[openapi(tag = "Session")]
#[post("/session/checkout/cancel")]
pub async fn cancel_checkout(session: &State<SharedSession>) -> Result<Json<ViewState>, AppError> {
    let mut session = session.lock().await;
    session.cancel_checkout()?;
    Ok(Json(session.view_state().clone()))
}

/// Points balance, flight cost and balance after booking
#[openapi(tag = "Session")]
#[get("/session/checkout")]
pub async fn checkout_summary(
    session: &State<SharedSession>,
) -> Result<Json<CheckoutSummary>, AppError> {
    Ok(Json(session.lock().await.checkout_summary()?))
}

/// Complete the demo booking and return to browsing
#[openapi(tag = "Session")]
#[post("/session/confirm")]
pub async fn confirm_booking(
    session: &State<SharedSession>,
) -> Result<Json<BookingConfirmation>, AppError> {
    let confirmation = session.lock().await.confirm_booking()?;
    Ok(Json(confirmation))
}
