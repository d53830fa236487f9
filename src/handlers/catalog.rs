use axum::{extract::State, response::Json};
use tracing::{debug, instrument};

use crate::schemas::{ApiResponse, AppState};

/// List the regions available for selection
#[utoipa::path(
    get,
    path = "/api/v1/regions",
    tag = "catalog",
    responses(
        (status = 200, description = "Regions retrieved successfully", body = ApiResponse<Vec<String>>)
    )
)]
#[instrument(skip(state))]
pub async fn get_regions(State(state): State<AppState>) -> Json<ApiResponse<Vec<String>>> {
    let regions: Vec<String> = state
        .dataset
        .regions()
        .iter()
        .map(ToString::to_string)
        .collect();
    debug!("Listing {} regions", regions.len());

    Json(ApiResponse {
        data: regions,
        message: "Regions retrieved successfully".to_string(),
        success: true,
    })
}

/// List the diseases available for selection
#[utoipa::path(
    get,
    path = "/api/v1/diseases",
    tag = "catalog",
    responses(
        (status = 200, description = "Diseases retrieved successfully", body = ApiResponse<Vec<String>>)
    )
)]
#[instrument(skip(state))]
pub async fn get_diseases(State(state): State<AppState>) -> Json<ApiResponse<Vec<String>>> {
    let diseases: Vec<String> = state
        .dataset
        .diseases()
        .iter()
        .map(ToString::to_string)
        .collect();
    debug!("Listing {} diseases", diseases.len());

    Json(ApiResponse {
        data: diseases,
        message: "Diseases retrieved successfully".to_string(),
        success: true,
    })
}
