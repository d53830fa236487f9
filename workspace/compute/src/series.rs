//! Per-pair projections of the case dataset and the day-offset mapping used
//! as the independent variable of the trend fit.

use chrono::{Days, NaiveDate};
use model::{Disease, Region};

use crate::error::{ComputeError, Result};

/// Number of whole days from `origin` to `date`.
pub fn day_offset(origin: NaiveDate, date: NaiveDate) -> i64 {
    (date - origin).num_days()
}

/// Inverse of [`day_offset`]: the date `offset` days after `origin`.
pub fn date_from_offset(origin: NaiveDate, offset: i64) -> Result<NaiveDate> {
    let days = u64::try_from(offset).map_err(|_| {
        ComputeError::DateOutOfRange(format!("negative day offset {} from {}", offset, origin))
    })?;
    origin.checked_add_days(Days::new(days)).ok_or_else(|| {
        ComputeError::DateOutOfRange(format!("{} days after {}", offset, origin))
    })
}

/// The observed series of one (region, disease) pair, in date order.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseSeries {
    region: Region,
    disease: Disease,
    points: Vec<(NaiveDate, f64)>,
}

impl CaseSeries {
    /// Creates a series from (date, cases) points. Points are sorted by date.
    pub fn new(region: Region, disease: Disease, mut points: Vec<(NaiveDate, f64)>) -> Self {
        points.sort_by_key(|(date, _)| *date);
        Self {
            region,
            disease,
            points,
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn disease(&self) -> Disease {
        self.disease
    }

    /// (date, cases) points in date order.
    pub fn points(&self) -> &[(NaiveDate, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First observed date.
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|(date, _)| *date)
    }

    /// Last observed date.
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|(date, _)| *date)
    }

    /// The last observed value, if any.
    pub fn latest_cases(&self) -> Option<f64> {
        self.points.last().map(|(_, cases)| *cases)
    }

    /// Points keyed by day offset from the first observed date.
    pub fn day_offsets(&self) -> Vec<(i64, f64)> {
        match self.min_date() {
            Some(origin) => self
                .points
                .iter()
                .map(|(date, cases)| (day_offset(origin, *date), *cases))
                .collect(),
            None => Vec::new(),
        }
    }
}
