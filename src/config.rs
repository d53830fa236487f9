use anyhow::Result;
use chrono::{Local, NaiveDate};
use compute::forecast::TrendForecaster;
use compute::generator::{SeriesGenerator, seeded_rng};
use moka::future::Cache;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::schemas::AppState;

/// Default bind address of the web server
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Prefix of the environment variables read into [`AppConfig`]
pub const ENV_PREFIX: &str = "FLUWATCH";

/// Application configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Bind address for the web server (IP:PORT)
    pub bind_address: String,
    /// Seed for the synthetic dataset; OS entropy when unset
    pub seed: Option<u64>,
    /// First generated date
    pub start_date: NaiveDate,
    /// Last generated date; today when unset
    pub end_date: Option<NaiveDate>,
    /// Largest accepted forecast horizon in days
    pub max_horizon: u32,
    /// Maximum number of cached responses
    pub cache_capacity: u64,
    /// Lifetime of cached responses in seconds
    pub cache_ttl_secs: u64,
}

impl AppConfig {
    /// Loads the configuration from defaults, a `.env` file and `FLUWATCH_*`
    /// environment variables.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads the configuration from defaults overridden by `environment`.
    pub fn from_environment(environment: config::Environment) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("start_date", compute::DEFAULT_START_DATE.to_string())?
            .set_default("max_horizon", 30)?
            .set_default("cache_capacity", 1000)?
            .set_default("cache_ttl_secs", 300)?
            .add_source(environment.try_parsing(true))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Last generated date, defaulting to today.
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Generator covering the configured date range.
    pub fn generator(&self) -> SeriesGenerator {
        SeriesGenerator::new(self.start_date, self.end_date())
    }

    /// Forecaster enforcing the configured maximum horizon.
    pub fn forecaster(&self) -> TrendForecaster {
        TrendForecaster::with_max_horizon(self.max_horizon)
    }
}

/// Initialize application state: the dataset is generated once here and
/// shared read-only by every handler.
pub fn initialize_app_state(config: &AppConfig) -> Result<AppState> {
    info!(
        "Generating case dataset from {} to {} (seed: {:?})",
        config.start_date,
        config.end_date(),
        config.seed
    );
    let dataset = config.generator().generate(&mut seeded_rng(config.seed))?;

    // Initialize cache
    let cache = Cache::builder()
        .max_capacity(config.cache_capacity)
        .time_to_live(Duration::from_secs(config.cache_ttl_secs))
        .build();

    Ok(AppState {
        dataset: Arc::new(dataset),
        forecaster: config.forecaster(),
        cache,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn environment(vars: &[(&str, &str)]) -> config::Environment {
        let mut map = config::Map::new();
        for (key, value) in vars {
            map.insert(key.to_string(), value.to_string());
        }
        config::Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_environment(environment(&[])).unwrap();

        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.seed, None);
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(config.end_date, None);
        assert_eq!(config.max_horizon, 30);
        assert_eq!(config.cache_capacity, 1000);
        assert_eq!(config.cache_ttl_secs, 300);
    }

    #[test]
    fn test_environment_overrides() {
        let config = AppConfig::from_environment(environment(&[
            ("FLUWATCH_BIND_ADDRESS", "127.0.0.1:8080"),
            ("FLUWATCH_SEED", "42"),
            ("FLUWATCH_START_DATE", "2024-03-01"),
            ("FLUWATCH_END_DATE", "2024-03-31"),
            ("FLUWATCH_MAX_HORIZON", "60"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.end_date(), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
        assert_eq!(config.max_horizon, 60);
        assert_eq!(config.forecaster().max_horizon(), Some(60));
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let result = AppConfig::from_environment(environment(&[("FLUWATCH_START_DATE", "soon")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_state_holds_generated_dataset() {
        let mut config = AppConfig::from_environment(environment(&[])).unwrap();
        config.seed = Some(1);
        config.end_date = NaiveDate::from_ymd_opt(2024, 1, 10);

        let state = initialize_app_state(&config).unwrap();
        assert_eq!(state.dataset.days(), 10);
        assert_eq!(state.dataset.len(), 150);
    }
}
