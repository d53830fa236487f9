pub mod dataset;
pub mod error;
pub mod forecast;
pub mod generator;
pub mod overview;
pub mod series;
pub mod summary;

use chrono::{Local, NaiveDate};
use generator::SeriesGenerator;

/// First date of the default generated range.
pub const DEFAULT_START_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(date) => date,
    None => panic!("invalid default start date"),
};

/// Returns a default pre-configured generator that will be used most of the time.
///
/// It covers every region and disease from [`DEFAULT_START_DATE`] up to the
/// provided date, or the current local date if none is provided.
pub fn default_generator(today: Option<NaiveDate>) -> SeriesGenerator {
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    SeriesGenerator::new(DEFAULT_START_DATE, today)
}
