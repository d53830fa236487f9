use axum::{extract::rejection::QueryRejection, http::StatusCode, response::Json};
use compute::error::ComputeError;
use model::UnknownLabel;
use tracing::{error, warn};

use crate::schemas::ErrorResponse;

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Builds an error response with the given status and error code.
pub fn error_response(status: StatusCode, code: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message,
            code: code.to_string(),
            success: false,
        }),
    )
}

/// Maps a compute failure to the response shown to the caller.
///
/// Precondition failures (bad labels, horizon, too little data) are client
/// errors; anything else is an internal error.
pub fn compute_error_response(err: ComputeError) -> ApiError {
    let (status, code) = match &err {
        ComputeError::UnknownLabel(label) => (StatusCode::BAD_REQUEST, unknown_label_code(label)),
        ComputeError::InvalidHorizon { .. } => (StatusCode::BAD_REQUEST, "INVALID_HORIZON"),
        ComputeError::InsufficientData { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, "INSUFFICIENT_DATA")
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "COMPUTE_ERROR"),
    };

    if status.is_server_error() {
        error!("Computation failed: {}", err);
    } else {
        warn!("Rejected request: {}", err);
    }

    error_response(status, code, err.to_string())
}

fn unknown_label_code(label: &UnknownLabel) -> &'static str {
    match label.kind {
        "region" => "UNKNOWN_REGION",
        _ => "UNKNOWN_DISEASE",
    }
}

/// Maps a query string that failed to deserialize (missing field, non-numeric
/// `days`) to a JSON error response.
pub fn query_rejection_response(rejection: QueryRejection) -> ApiError {
    warn!("Rejected query string: {}", rejection.body_text());
    error_response(
        StatusCode::BAD_REQUEST,
        "INVALID_QUERY",
        rejection.body_text(),
    )
}
