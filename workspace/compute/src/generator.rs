//! Synthetic case series.
//!
//! Each (region, disease) pair gets a random base level and a cumulative
//! random walk whose daily increments are drawn around that base, which
//! yields a steadily growing, noisy series.

use chrono::NaiveDate;
use model::{CaseRecord, Disease, Region};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::{debug, info, instrument, trace};

use crate::dataset::CaseDataset;
use crate::error::{ComputeError, Result};

/// Base levels are drawn uniformly from this half-open range.
pub const BASE_LEVEL_RANGE: std::ops::Range<u32> = 10..100;

/// Standard deviation of the daily increment around the base level.
pub const INCREMENT_STD_DEV: f64 = 2.0;

/// Returns a random source seeded with `seed`, or from OS entropy when no
/// seed is given.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Generates the case dataset for a date range and a set of regions and
/// diseases.
#[derive(Debug, Clone)]
pub struct SeriesGenerator {
    start_date: NaiveDate,
    end_date: NaiveDate,
    regions: Vec<Region>,
    diseases: Vec<Disease>,
}

impl SeriesGenerator {
    /// Creates a generator for every known region and disease.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            regions: Region::ALL.to_vec(),
            diseases: Disease::ALL.to_vec(),
        }
    }

    /// Restricts generation to the given regions.
    pub fn with_regions(mut self, regions: Vec<Region>) -> Self {
        self.regions = regions;
        self
    }

    /// Restricts generation to the given diseases.
    pub fn with_diseases(mut self, diseases: Vec<Disease>) -> Self {
        self.diseases = diseases;
        self
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Every date of the range, in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.start_date
            .iter_days()
            .take_while(|date| *date <= self.end_date)
            .collect()
    }

    /// Generates the full dataset, consuming randomness from `rng`.
    ///
    /// Pairs are generated region-major, so a seeded `rng` reproduces the
    /// same table for the same generator configuration.
    #[instrument(skip(self, rng), fields(start_date = %self.start_date, end_date = %self.end_date))]
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<CaseDataset> {
        if self.start_date > self.end_date {
            return Err(ComputeError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }

        let dates = self.dates();
        let mut records =
            Vec::with_capacity(dates.len() * self.regions.len() * self.diseases.len());

        for region in &self.regions {
            for disease in &self.diseases {
                let base = rng.random_range(BASE_LEVEL_RANGE);
                trace!("Base level for {} / {}: {}", region, disease, base);

                let walk = random_walk(rng, f64::from(base), dates.len())?;
                records.extend(
                    dates
                        .iter()
                        .zip(walk)
                        .map(|(date, cases)| CaseRecord::new(*region, *disease, *date, cases)),
                );
            }
        }

        info!(
            "Generated {} case records over {} days for {} regions and {} diseases",
            records.len(),
            dates.len(),
            self.regions.len(),
            self.diseases.len()
        );

        Ok(CaseDataset::new(
            self.start_date,
            self.end_date,
            self.regions.clone(),
            self.diseases.clone(),
            records,
        ))
    }
}

/// Cumulative sum of `days` Gaussian increments centered on `base`.
///
/// Each emitted value is clamped to zero; the running total itself is not.
fn random_walk<R: Rng + ?Sized>(rng: &mut R, base: f64, days: usize) -> Result<Vec<f64>> {
    let increments = Normal::new(base, INCREMENT_STD_DEV)?;
    let mut total = 0.0;
    let mut values = Vec::with_capacity(days);

    for _ in 0..days {
        total += increments.sample(rng);
        values.push(total.max(0.0));
    }

    debug!("Random walk of {} days ends at {}", days, total);
    Ok(values)
}
