use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::timeseries::DateRange;

/// Aggregates of one (region, disease) series.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SeriesOverviewRow {
    pub region: String,
    pub disease: String,
    pub days: u32,
    pub latest_cases: f64,
    pub peak_cases: f64,
    pub mean_cases: f64,
}

/// Overview of the whole generated dataset.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DatasetOverview {
    pub date_range: DateRange,
    /// Total number of case rows
    pub rows: usize,
    pub series: Vec<SeriesOverviewRow>,
}
