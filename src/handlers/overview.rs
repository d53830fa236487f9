use axum::{extract::State, response::Json};
use common::DatasetOverview;
use compute::overview::compute_overview;
use tracing::instrument;

use crate::helpers::converters::overview_to_dto;
use crate::helpers::errors::{ApiError, compute_error_response};
use crate::schemas::{ApiResponse, AppState, CachedData};

const OVERVIEW_CACHE_KEY: &str = "overview";

/// Get latest, peak and mean cases of every series
#[utoipa::path(
    get,
    path = "/api/v1/overview",
    tag = "overview",
    responses(
        (status = 200, description = "Overview computed successfully", body = ApiResponse<DatasetOverview>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_overview(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DatasetOverview>>, ApiError> {
    if let Some(CachedData::Overview(overview)) = state.cache.get(OVERVIEW_CACHE_KEY).await {
        return Ok(Json(ApiResponse {
            data: overview,
            message: "Overview retrieved from cache".to_string(),
            success: true,
        }));
    }

    let rows = compute_overview(&state.dataset).map_err(compute_error_response)?;
    let overview = overview_to_dto(&state.dataset, rows);

    state
        .cache
        .insert(
            OVERVIEW_CACHE_KEY.to_string(),
            CachedData::Overview(overview.clone()),
        )
        .await;

    Ok(Json(ApiResponse {
        data: overview,
        message: "Overview computed successfully".to_string(),
        success: true,
    }))
}
