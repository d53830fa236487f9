use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A projected value for a day after the last observed date of a series.
///
/// Unlike observed cases, predictions are not clamped: a declining trend
/// can project negative counts and those are kept as computed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub date: NaiveDate,
    pub predicted_cases: f64,
}

impl PredictionRecord {
    pub fn new(date: NaiveDate, predicted_cases: f64) -> Self {
        Self {
            date,
            predicted_cases,
        }
    }
}
