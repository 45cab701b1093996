use crate::services::session_service::SessionService;
use tokio::sync::Mutex;

pub mod flight_route;
pub mod session_route;

// One controller per process; each request runs a single transition under the lock
pub type SharedSession = Mutex<SessionService>;
