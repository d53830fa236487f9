use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inclusive range of dates covered by a series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// One observed day of a series.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CasePoint {
    pub date: NaiveDate,
    pub cases: f64,
}

impl CasePoint {
    pub fn new(date: NaiveDate, cases: f64) -> Self {
        Self { date, cases }
    }
}

/// Historical series of one (region, disease) pair, ready for charting.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CaseTimeseries {
    pub region: String,
    pub disease: String,
    /// None when the series has no points
    pub date_range: Option<DateRange>,
    pub points: Vec<CasePoint>,
}

impl CaseTimeseries {
    /// Builds the payload, deriving the date range from the first and last point.
    pub fn new(region: String, disease: String, points: Vec<CasePoint>) -> Self {
        let date_range = match (points.first(), points.last()) {
            (Some(first), Some(last)) => Some(DateRange {
                start: first.date,
                end: last.date,
            }),
            _ => None,
        };
        Self {
            region,
            disease,
            date_range,
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_from_points() {
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let ts = CaseTimeseries::new(
            "Delhi".to_string(),
            "Flu".to_string(),
            vec![CasePoint::new(d1, 1.0), CasePoint::new(d2, 2.0)],
        );
        assert_eq!(ts.date_range, Some(DateRange { start: d1, end: d2 }));

        let json = serde_json::to_value(&ts).unwrap();
        assert_eq!(json["points"][1]["date"], "2024-01-02");
        assert_eq!(json["date_range"]["start"], "2024-01-01");
    }

    #[test]
    fn test_empty_series_has_no_range() {
        let ts = CaseTimeseries::new("Delhi".to_string(), "Flu".to_string(), vec![]);
        assert_eq!(ts.date_range, None);
    }
}
