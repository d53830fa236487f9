use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::disease::Disease;
use super::region::Region;

/// One observed day of a (region, disease) series.
///
/// `cases` is never negative: the generator clamps values before a record
/// is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub region: Region,
    pub disease: Disease,
    pub date: NaiveDate,
    pub cases: f64,
}

impl CaseRecord {
    /// Creates a new CaseRecord.
    pub fn new(region: Region, disease: Disease, date: NaiveDate, cases: f64) -> Self {
        Self {
            region,
            disease,
            date,
            cases,
        }
    }

    /// Whether the record belongs to the given series.
    pub fn is_in(&self, region: Region, disease: Disease) -> bool {
        self.region == region && self.disease == disease
    }
}
