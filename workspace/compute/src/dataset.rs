//! The generated case table.
//!
//! A dataset is built once by the generator and never mutated afterwards;
//! callers only take read-only projections from it.

use chrono::NaiveDate;
use model::{CaseRecord, Disease, Region};
use polars::prelude::*;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::series::CaseSeries;

/// Immutable table of case records, one row per (region, disease, date).
///
/// Rows are ordered by region, then disease, then date, following the order
/// of the region and disease sets the dataset was generated with.
#[derive(Debug, Clone)]
pub struct CaseDataset {
    start_date: NaiveDate,
    end_date: NaiveDate,
    regions: Vec<Region>,
    diseases: Vec<Disease>,
    records: Vec<CaseRecord>,
}

impl CaseDataset {
    pub(crate) fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        regions: Vec<Region>,
        diseases: Vec<Disease>,
        records: Vec<CaseRecord>,
    ) -> Self {
        Self {
            start_date,
            end_date,
            regions,
            diseases,
            records,
        }
    }

    pub fn records(&self) -> &[CaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Regions covered by the dataset, in generation order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Diseases covered by the dataset, in generation order.
    pub fn diseases(&self) -> &[Disease] {
        &self.diseases
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Number of days in the generated range, both ends included.
    pub fn days(&self) -> usize {
        ((self.end_date - self.start_date).num_days() + 1).max(0) as usize
    }

    /// The series of one (region, disease) pair.
    ///
    /// A pair the dataset was not generated for yields an empty series.
    #[instrument(skip(self), fields(rows = self.records.len()))]
    pub fn series(&self, region: Region, disease: Disease) -> CaseSeries {
        let points = self
            .records
            .iter()
            .filter(|record| record.is_in(region, disease))
            .map(|record| (record.date, record.cases))
            .collect::<Vec<_>>();
        debug!("Selected {} rows for {} / {}", points.len(), region, disease);
        CaseSeries::new(region, disease, points)
    }

    /// Like [`CaseDataset::series`], parsing the region and disease labels first.
    pub fn series_by_label(&self, region: &str, disease: &str) -> Result<CaseSeries> {
        let region: Region = region.parse()?;
        let disease: Disease = disease.parse()?;
        Ok(self.series(region, disease))
    }

    /// Exports the table as a DataFrame with columns
    /// `region` (str), `disease` (str), `date` (date) and `cases` (f64).
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let mut regions = Vec::with_capacity(self.records.len());
        let mut diseases = Vec::with_capacity(self.records.len());
        let mut dates = Vec::with_capacity(self.records.len());
        let mut cases = Vec::with_capacity(self.records.len());

        for record in &self.records {
            regions.push(record.region.as_str());
            diseases.push(record.disease.as_str());
            dates.push(record.date);
            cases.push(record.cases);
        }

        let df = DataFrame::new(vec![
            Series::new("region".into(), regions).into(),
            Series::new("disease".into(), diseases).into(),
            Series::new("date".into(), dates).into(),
            Series::new("cases".into(), cases).into(),
        ])?;

        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn small_dataset() -> CaseDataset {
        let start = date(2024, 1, 1);
        let end = date(2024, 1, 2);
        let records = vec![
            CaseRecord::new(Region::Delhi, Disease::Flu, start, 10.0),
            CaseRecord::new(Region::Delhi, Disease::Flu, end, 12.5),
            CaseRecord::new(Region::Delhi, Disease::Dengue, start, 40.0),
            CaseRecord::new(Region::Delhi, Disease::Dengue, end, 41.0),
        ];
        CaseDataset::new(
            start,
            end,
            vec![Region::Delhi],
            vec![Disease::Flu, Disease::Dengue],
            records,
        )
    }

    #[test]
    fn test_series_filters_one_pair() {
        let dataset = small_dataset();
        let series = dataset.series(Region::Delhi, Disease::Dengue);
        assert_eq!(
            series.points(),
            &[(date(2024, 1, 1), 40.0), (date(2024, 1, 2), 41.0)]
        );
    }

    #[test]
    fn test_series_for_missing_pair_is_empty() {
        let dataset = small_dataset();
        assert!(dataset.series(Region::Chennai, Disease::Flu).is_empty());
    }

    #[test]
    fn test_series_by_label_rejects_unknown_disease() {
        let dataset = small_dataset();
        let err = dataset.series_by_label("Delhi", "Malaria").unwrap_err();
        assert_eq!(err.to_string(), "Unknown disease: 'Malaria'");
    }

    #[test]
    fn test_to_dataframe() {
        let dataset = small_dataset();
        let df = dataset.to_dataframe().unwrap();

        assert_eq!(df.height(), 4);
        assert_eq!(df.width(), 4);
        assert_eq!(df.column("date").unwrap().dtype(), &DataType::Date);

        let mask = df.column("disease").unwrap().str().unwrap().equal("Flu");
        let flu_df = df.filter(&mask).unwrap();
        assert_eq!(flu_df.height(), 2);
        assert_eq!(
            flu_df.column("cases").unwrap().f64().unwrap().get(1).unwrap(),
            12.5
        );
    }

    #[test]
    fn test_days_counts_both_ends() {
        assert_eq!(small_dataset().days(), 2);
    }
}
