use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::timeseries::CaseTimeseries;

/// Fitted line `cases = slope * day_offset + intercept`, where the day offset
/// counts from the first historical date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

/// One projected day. Values may be fractional or negative.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PredictionPoint {
    pub date: NaiveDate,
    pub predicted_cases: f64,
}

/// Historical series, fitted trend and predictions for one selection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastReport {
    pub region: String,
    pub disease: String,
    /// Number of predicted days
    pub horizon: u32,
    pub trend: TrendLine,
    pub history: CaseTimeseries,
    pub predictions: Vec<PredictionPoint>,
    /// Prediction for the last day of the horizon
    pub final_prediction: f64,
    /// Human-readable summary line
    pub summary: String,
}
