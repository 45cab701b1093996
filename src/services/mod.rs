pub mod flight_service;
pub mod session_service;
