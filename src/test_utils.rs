#[cfg(test)]
pub mod test_utils {
    use crate::config::{AppConfig, initialize_app_state};
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use chrono::NaiveDate;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Seed shared by every test fixture
    pub const TEST_SEED: u64 = 20240101;

    /// Configuration covering January through March 2024 with a fixed seed
    pub fn test_config() -> AppConfig {
        AppConfig {
            bind_address: "127.0.0.1:0".to_string(),
            seed: Some(TEST_SEED),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 31),
            max_horizon: 30,
            cache_capacity: 100,
            cache_ttl_secs: 60,
        }
    }

    /// Create AppState for testing
    pub fn setup_test_app_state() -> AppState {
        initialize_app_state(&test_config()).expect("Failed to initialize test state")
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// Logs are captured while the returned guard is alive. The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub fn setup_test_app() -> Router {
        create_router(setup_test_app_state())
    }
}
