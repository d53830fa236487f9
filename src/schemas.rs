use common::{
    CasePoint, CaseTimeseries, DatasetOverview, DateRange, ForecastReport, PredictionPoint,
    SeriesOverviewRow, TrendLine,
};
use compute::dataset::CaseDataset;
use compute::forecast::TrendForecaster;
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};

pub use common::{ApiResponse, ErrorResponse};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Generated once at startup, never mutated
    pub dataset: Arc<CaseDataset>,
    /// Trend forecaster with the configured horizon limit
    pub forecaster: TrendForecaster,
    /// Cache for derived responses
    pub cache: Cache<String, CachedData>,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Forecast(ForecastReport),
    Overview(DatasetOverview),
}

/// Query parameters for series endpoints
#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SeriesQuery {
    /// Region label (e.g., Delhi)
    pub region: String,
    /// Disease label (e.g., Flu, COVID-19)
    pub disease: String,
}

/// Query parameters for forecast endpoints
#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ForecastQuery {
    /// Region label (e.g., Delhi)
    pub region: String,
    /// Disease label (e.g., Flu, COVID-19)
    pub disease: String,
    /// Days into the future (default: 7)
    #[serde(default = "default_forecast_days")]
    pub days: i64,
}

pub fn default_forecast_days() -> i64 {
    7
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of rows in the generated dataset
    pub dataset_rows: usize,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::catalog::get_regions,
        crate::handlers::catalog::get_diseases,
        crate::handlers::series::get_series,
        crate::handlers::forecast::get_forecast,
        crate::handlers::overview::get_overview,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            SeriesQuery,
            ForecastQuery,
            CaseTimeseries,
            CasePoint,
            DateRange,
            ForecastReport,
            TrendLine,
            PredictionPoint,
            DatasetOverview,
            SeriesOverviewRow,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "catalog", description = "Region and disease selection endpoints"),
        (name = "series", description = "Historical case series endpoints"),
        (name = "forecast", description = "Trend forecast endpoints"),
        (name = "overview", description = "Dataset overview endpoints"),
    ),
    info(
        title = "FluWatch API",
        description = "Disease trend tracker and outbreak predictor over synthetic case data",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
