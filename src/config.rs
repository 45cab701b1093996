use crate::fixture::FlightStore;
use crate::services::session_service::DEFAULT_POINTS_BALANCE;
use crate::utils::error::{AppError, AppResult};
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const POINTS_BALANCE_VAR: &str = "SKYWARD_POINTS_BALANCE";
pub const FIXTURE_PATH_VAR: &str = "SKYWARD_FIXTURE_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub points_balance: u64,
    pub fixture_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            points_balance: DEFAULT_POINTS_BALANCE,
            fixture_path: None,
        }
    }
}

impl AppConfig {
    // Read `.env` if present, then the process environment
    pub fn from_env() -> AppResult<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let points_balance = match lookup(POINTS_BALANCE_VAR) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::ConfigError(format!(
                    "{} must be a non-negative integer, got {:?}",
                    POINTS_BALANCE_VAR, raw
                ))
            })?,
            None => DEFAULT_POINTS_BALANCE,
        };

        let fixture_path = lookup(FIXTURE_PATH_VAR)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        Ok(AppConfig {
            points_balance,
            fixture_path,
        })
    }

    // Fixture file when configured, built-in offers otherwise
    pub fn load_store(&self) -> AppResult<FlightStore> {
        match &self.fixture_path {
            Some(path) => FlightStore::from_json_file(path),
            None => FlightStore::skyward(),
        }
    }
}
