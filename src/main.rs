#[macro_use]
extern crate rocket;

use skyward_rewards::build_rocket;
use skyward_rewards::config::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[launch]
fn rocket() -> _ {
    // Rocket's own log lines are forwarded into the same subscriber
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skyward_rewards=debug,rocket=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    let config = AppConfig::from_env().expect("Failed to load configuration");
    let store = config.load_store().expect("Failed to load flight fixture");

    tracing::info!(
        offers = store.len(),
        points_balance = config.points_balance,
        "starting Skyward Rewards demo"
    );

    build_rocket(store, config.points_balance)
}
