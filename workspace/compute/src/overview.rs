//! Per-series aggregates over the whole dataset.
//!
//! The dataset is exported to a DataFrame and grouped by (region, disease)
//! in first-appearance order, so the overview follows the dataset's
//! region-major ordering.

use model::{Disease, Region};
use polars::prelude::*;
use tracing::{info, instrument};

use crate::dataset::CaseDataset;
use crate::error::{ComputeError, Result};

/// Aggregates of one (region, disease) series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesOverview {
    pub region: Region,
    pub disease: Disease,
    /// Number of observed days
    pub days: u32,
    /// Cases on the last observed day
    pub latest_cases: f64,
    pub peak_cases: f64,
    pub mean_cases: f64,
}

/// Computes one [`SeriesOverview`] per (region, disease) pair of the dataset.
#[instrument(skip(dataset), fields(rows = dataset.len()))]
pub fn compute_overview(dataset: &CaseDataset) -> Result<Vec<SeriesOverview>> {
    if dataset.is_empty() {
        return Ok(Vec::new());
    }

    let df = dataset
        .to_dataframe()?
        .lazy()
        .group_by_stable([col("region"), col("disease")])
        .agg([
            col("cases").count().cast(DataType::UInt32).alias("days"),
            col("cases").last().alias("latest_cases"),
            col("cases").max().alias("peak_cases"),
            col("cases").mean().alias("mean_cases"),
        ])
        .collect()?;

    let overview = overview_from_dataframe(&df)?;
    info!("Computed overview for {} series", overview.len());
    Ok(overview)
}

fn overview_from_dataframe(df: &DataFrame) -> Result<Vec<SeriesOverview>> {
    let regions = df.column("region")?.str()?;
    let diseases = df.column("disease")?.str()?;
    let days = df.column("days")?.u32()?;
    let latest = df.column("latest_cases")?.f64()?;
    let peak = df.column("peak_cases")?.f64()?;
    let mean = df.column("mean_cases")?.f64()?;

    let missing = |column: &str, row: usize| {
        ComputeError::DataFrame(format!("Missing {} at row {}", column, row))
    };

    let mut overview = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        overview.push(SeriesOverview {
            region: regions.get(i).ok_or_else(|| missing("region", i))?.parse()?,
            disease: diseases.get(i).ok_or_else(|| missing("disease", i))?.parse()?,
            days: days.get(i).ok_or_else(|| missing("days", i))?,
            latest_cases: latest.get(i).ok_or_else(|| missing("latest_cases", i))?,
            peak_cases: peak.get(i).ok_or_else(|| missing("peak_cases", i))?,
            mean_cases: mean.get(i).ok_or_else(|| missing("mean_cases", i))?,
        });
    }

    Ok(overview)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{SeriesGenerator, seeded_rng};
    use chrono::NaiveDate;

    #[test]
    fn test_overview_matches_series() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let dataset = SeriesGenerator::new(start, end)
            .generate(&mut seeded_rng(Some(9)))
            .unwrap();

        let overview = compute_overview(&dataset).unwrap();
        assert_eq!(overview.len(), Region::ALL.len() * Disease::ALL.len());
        assert_eq!(overview[0].region, Region::Delhi);
        assert_eq!(overview[0].disease, Disease::Flu);
        assert_eq!(overview[1].disease, Disease::Dengue);

        for row in &overview {
            let series = dataset.series(row.region, row.disease);
            let values: Vec<f64> = series.points().iter().map(|(_, c)| *c).collect();
            let peak = values.iter().copied().fold(f64::MIN, f64::max);
            let mean = values.iter().sum::<f64>() / values.len() as f64;

            assert_eq!(row.days, 31);
            assert_eq!(row.latest_cases, series.latest_cases().unwrap());
            assert_eq!(row.peak_cases, peak);
            assert!((row.mean_cases - mean).abs() < 1e-9);
        }
    }

    #[test]
    fn test_overview_of_empty_dataset() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let dataset = SeriesGenerator::new(day, day)
            .with_diseases(vec![])
            .generate(&mut seeded_rng(Some(1)))
            .unwrap();
        assert!(compute_overview(&dataset).unwrap().is_empty());
    }
}
