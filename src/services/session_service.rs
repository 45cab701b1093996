use crate::models::flight::DecoratedFlightOffer;
use crate::models::session::{BookingConfirmation, CheckoutSummary, Screen, ViewState};
use crate::services::flight_service::FlightService;
use crate::utils::error::{AppError, AppResult};
use crate::utils::format::{format_cash, format_points_delta};

pub const DEFAULT_POINTS_BALANCE: u64 = 120_000;

const DEMO_USERNAME: &str = "test";
const DEMO_PASSWORD: &str = "testpass";

pub const AUTH_FAILED_MESSAGE: &str = "Incorrect username or password. Try test / testpass.";
pub const BOOKING_CONFIRMED_MESSAGE: &str = "Demo checkout complete! Returning to flight search.";

/// Browse -> Auth -> Checkout state machine behind the booking screens.
///
/// Every intent checks that it is legal on the current screen and leaves the
/// state untouched when it is not. The only failure that changes state is a
/// rejected login, which records `auth_error` and stays on `Auth`.
pub struct SessionService {
    flight_service: FlightService,
    points_balance: u64,
    state: ViewState,
    visible: Vec<DecoratedFlightOffer>,
}

impl SessionService {
    pub fn new(flight_service: FlightService, points_balance: u64) -> Self {
        let state = ViewState::default();
        let visible = flight_service.derive(&state.selected_cabin);
        SessionService {
            flight_service,
            points_balance,
            state,
            visible,
        }
    }

    pub fn cabin_options(&self) -> &[String] {
        self.flight_service.cabin_options()
    }

    pub fn visible_flights(&self) -> &[DecoratedFlightOffer] {
        &self.visible
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn points_balance(&self) -> u64 {
        self.points_balance
    }

    pub fn select_cabin(&mut self, cabin: &str) -> AppResult<()> {
        self.require_screen(Screen::Browse, "select cabin")?;

        if !self.flight_service.is_known_cabin(cabin) {
            tracing::warn!(cabin, "rejected unknown cabin");
            return Err(AppError::ValidationError(format!("Unknown cabin: {}", cabin)));
        }

        // Same filter, same list
        if self.state.selected_cabin != cabin {
            self.state.selected_cabin = cabin.to_string();
            self.visible = self.flight_service.derive(cabin);
        }

        tracing::debug!(cabin, visible = self.visible.len(), "cabin selected");
        Ok(())
    }

    pub fn request_checkout(&mut self, flight_id: &str) -> AppResult<()> {
        self.require_screen(Screen::Browse, "request checkout")?;

        let flight = self
            .visible
            .iter()
            .find(|flight| flight.id() == flight_id)
            .cloned()
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Flight {} is not in the current list for {}",
                    flight_id, self.state.selected_cabin
                ))
            })?;

        self.state.selected_flight = Some(flight);
        self.reset_auth_form();
        self.state.screen = Screen::Auth;

        tracing::info!(flight = flight_id, "checkout requested, awaiting sign-in");
        Ok(())
    }

    pub fn submit_credentials(&mut self, username: &str, password: &str) -> AppResult<()> {
        self.require_screen(Screen::Auth, "submit credentials")?;

        self.state.username = username.to_string();
        self.state.password = password.to_string();

        if username.trim() == DEMO_USERNAME && password == DEMO_PASSWORD {
            self.state.auth_error = None;
            self.state.screen = Screen::Checkout;
            tracing::info!(username = username.trim(), "signed in, entering checkout");
            Ok(())
        } else {
            self.state.auth_error = Some(AUTH_FAILED_MESSAGE.to_string());
            tracing::warn!(username = username.trim(), "sign-in rejected");
            Err(AppError::AuthenticationFailed(AUTH_FAILED_MESSAGE.to_string()))
        }
    }

    pub fn cancel_auth(&mut self) -> AppResult<()> {
        self.require_screen(Screen::Auth, "cancel sign-in")?;
        self.state.auth_error = None;
        self.return_to_browse();
        Ok(())
    }

    pub fn cancel_checkout(&mut self) -> AppResult<()> {
        self.require_screen(Screen::Checkout, "cancel checkout")?;
        self.return_to_browse();
        Ok(())
    }

    // Back button shared by the auth and checkout screens
    pub fn cancel(&mut self) -> AppResult<()> {
        match self.state.screen {
            Screen::Auth => self.cancel_auth(),
            Screen::Checkout => self.cancel_checkout(),
            Screen::Browse => Err(AppError::Conflict(
                "cancel is not allowed on the browse screen".to_string(),
            )),
        }
    }

    pub fn checkout_summary(&self) -> AppResult<CheckoutSummary> {
        self.require_screen(Screen::Checkout, "view checkout")?;
        let flight = self.selected_flight()?.clone();

        let points_price = flight.offer.points_price;
        let remaining = remaining_points(self.points_balance, points_price);

        Ok(CheckoutSummary {
            points_balance: self.points_balance,
            points_price,
            remaining_points: remaining,
            remaining_label: format_points_delta(remaining),
            cash_label: format_cash(flight.offer.cash_price),
            sufficient_points: remaining >= 0,
            flight,
        })
    }

    /// Completes the demo booking. Nothing is recorded; the returned notice is
    /// the only trace of it.
    pub fn confirm_booking(&mut self) -> AppResult<BookingConfirmation> {
        self.require_screen(Screen::Checkout, "confirm booking")?;
        let flight = self.selected_flight()?;

        let confirmation = BookingConfirmation {
            message: BOOKING_CONFIRMED_MESSAGE.to_string(),
            flight_id: flight.id().to_string(),
            points_spent: flight.offer.points_price,
            remaining_points: remaining_points(self.points_balance, flight.offer.points_price),
        };

        tracing::info!(flight = %confirmation.flight_id, "demo booking confirmed");
        self.return_to_browse();
        Ok(confirmation)
    }

    fn require_screen(&self, expected: Screen, intent: &str) -> AppResult<()> {
        if self.state.screen == expected {
            return Ok(());
        }
        tracing::warn!(intent, screen = %self.state.screen, "intent not allowed here");
        Err(AppError::Conflict(format!(
            "{} is not allowed on the {} screen",
            intent, self.state.screen
        )))
    }

    fn selected_flight(&self) -> AppResult<&DecoratedFlightOffer> {
        self.state.selected_flight.as_ref().ok_or_else(|| {
            AppError::Conflict(format!("no flight selected on the {} screen", self.state.screen))
        })
    }

    fn reset_auth_form(&mut self) {
        self.state.username.clear();
        self.state.password.clear();
        self.state.auth_error = None;
    }

    fn return_to_browse(&mut self) {
        self.state.screen = Screen::Browse;
        self.state.selected_flight = None;
        tracing::info!("returned to browse");
    }
}

/// Points left after paying `points_price` out of `balance`; negative when
/// the balance falls short. Saturates at the `i64` bounds.
pub fn remaining_points(balance: u64, points_price: u64) -> i64 {
    let remaining = i128::from(balance) - i128::from(points_price);
    i64::try_from(remaining).unwrap_or(if remaining < 0 { i64::MIN } else { i64::MAX })
}
