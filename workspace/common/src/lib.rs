//! Common transport-layer types shared between the API server and its clients.
//! These structs are the request/response payloads of the HTTP handlers, so a
//! frontend can deserialize API responses without duplicating shapes.

mod forecast;
mod overview;
mod timeseries;

pub use forecast::{ForecastReport, PredictionPoint, TrendLine};
pub use overview::{DatasetOverview, SeriesOverviewRow};
pub use timeseries::{CasePoint, CaseTimeseries, DateRange};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

/// Error payload returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}
