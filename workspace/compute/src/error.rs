use chrono::NaiveDate;
use thiserror::Error;
use tracing::error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// A line needs at least two points to be fitted
    #[error("Insufficient data: a trend needs at least 2 points, got {points}")]
    InsufficientData { points: usize },

    /// Forecast horizon outside the supported range; `max` is `None` when
    /// only the lower bound applies
    #[error("Invalid horizon: {horizon} days ({})", horizon_bounds(.max))]
    InvalidHorizon { horizon: i64, max: Option<u32> },

    /// Generation range whose start lies after its end
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// Date arithmetic past the representable calendar
    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    /// Region or disease label outside the known sets
    #[error(transparent)]
    UnknownLabel(#[from] model::UnknownLabel),

    /// Error from the random source or its distributions
    #[error("Generation error: {0}")]
    Generation(String),

    /// Error from the least-squares solver
    #[error("Regression error: {0}")]
    Regression(String),

    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(String),
}

fn horizon_bounds(max: &Option<u32>) -> String {
    match max {
        Some(max) => format!("must be between 1 and {}", max),
        None => "must be at least 1".to_string(),
    }
}

impl From<rand_distr::NormalError> for ComputeError {
    fn from(error: rand_distr::NormalError) -> Self {
        let err = ComputeError::Generation(format!("Normal distribution: {}", error));
        error!(?err, "Generation error");
        err
    }
}

impl From<polars::error::PolarsError> for ComputeError {
    fn from(error: polars::error::PolarsError) -> Self {
        let compute_error = match error {
            polars::error::PolarsError::ColumnNotFound(_) => {
                let err = ComputeError::DataFrame(format!("Column not found: {}", error));
                error!(?err, "DataFrame error: Column not found");
                err
            }
            polars::error::PolarsError::ShapeMismatch(_) => {
                let err = ComputeError::DataFrame(format!("Shape mismatch: {}", error));
                error!(?err, "DataFrame error: Shape mismatch");
                err
            }
            polars::error::PolarsError::SchemaMismatch(_) => {
                let err = ComputeError::DataFrame(format!("Schema mismatch: {}", error));
                error!(?err, "DataFrame error: Schema mismatch");
                err
            }
            _ => {
                let err = ComputeError::DataFrame(error.to_string());
                error!(?err, "DataFrame error");
                err
            }
        };
        compute_error
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
