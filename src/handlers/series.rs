use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Json,
};
use common::CaseTimeseries;
use tracing::{debug, instrument, trace};

use crate::helpers::converters::series_to_timeseries;
use crate::helpers::errors::{ApiError, compute_error_response, query_rejection_response};
use crate::schemas::{ApiResponse, AppState, SeriesQuery};

/// Get the historical series of one region and disease
#[utoipa::path(
    get,
    path = "/api/v1/series",
    tag = "series",
    params(SeriesQuery),
    responses(
        (status = 200, description = "Series retrieved successfully", body = ApiResponse<CaseTimeseries>),
        (status = 400, description = "Unknown region or disease, or malformed query", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_series(
    State(state): State<AppState>,
    query: Result<Query<SeriesQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<CaseTimeseries>>, ApiError> {
    let Query(query) = query.map_err(query_rejection_response)?;
    trace!("Entering get_series function");

    let series = state
        .dataset
        .series_by_label(&query.region, &query.disease)
        .map_err(compute_error_response)?;
    debug!("Series for {:?} has {} points", query, series.len());

    Ok(Json(ApiResponse {
        data: series_to_timeseries(&series),
        message: "Series retrieved successfully".to_string(),
        success: true,
    }))
}
