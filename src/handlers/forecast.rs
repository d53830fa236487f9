use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Json,
};
use common::ForecastReport;
use tracing::{debug, info, instrument, trace};

use crate::helpers::converters::forecast_to_report;
use crate::helpers::errors::{ApiError, compute_error_response, query_rejection_response};
use crate::schemas::{ApiResponse, AppState, CachedData, ForecastQuery};

/// Forecast cases of one region and disease
///
/// Fits a least-squares line to the historical series and projects it
/// `days` days past the last observed date. Predictions are not clamped, so
/// a declining trend may project negative counts.
#[utoipa::path(
    get,
    path = "/api/v1/forecast",
    tag = "forecast",
    params(ForecastQuery),
    responses(
        (status = 200, description = "Forecast computed successfully", body = ApiResponse<ForecastReport>),
        (status = 400, description = "Unknown region or disease, invalid horizon, or malformed query", body = crate::schemas::ErrorResponse),
        (status = 422, description = "Too few observations to fit a trend", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_forecast(
    State(state): State<AppState>,
    query: Result<Query<ForecastQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<ForecastReport>>, ApiError> {
    let Query(query) = query.map_err(query_rejection_response)?;
    trace!("Entering get_forecast function");

    let horizon = state
        .forecaster
        .horizon_from_days(query.days)
        .map_err(compute_error_response)?;

    // Create cache key
    let cache_key = format!("forecast_{}_{}_{}", query.region, query.disease, horizon);

    // Check cache first
    if let Some(CachedData::Forecast(report)) = state.cache.get(&cache_key).await {
        debug!("Forecast served from cache: {}", cache_key);
        return Ok(Json(ApiResponse {
            data: report,
            message: "Forecast retrieved from cache".to_string(),
            success: true,
        }));
    }

    let series = state
        .dataset
        .series_by_label(&query.region, &query.disease)
        .map_err(compute_error_response)?;
    let forecast = state
        .forecaster
        .forecast(&series, horizon)
        .map_err(compute_error_response)?;

    let report = forecast_to_report(&series, &forecast);
    info!("{}", report.summary);

    // Cache the result
    state
        .cache
        .insert(cache_key, CachedData::Forecast(report.clone()))
        .await;

    Ok(Json(ApiResponse {
        data: report,
        message: "Forecast computed successfully".to_string(),
        success: true,
    }))
}
