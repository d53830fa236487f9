//! Linear trend fitting and extrapolation.
//!
//! The trend is the ordinary least squares line `cases = slope * day + intercept`
//! over (day offset, cases) points, evaluated past the last observed day.

use chrono::NaiveDate;
use linfa::Dataset;
use linfa::traits::Fit;
use linfa_linear::LinearRegression;
use model::{Disease, PredictionRecord, Region};
use ndarray::{Array1, Array2};
use tracing::{debug, instrument};

use crate::error::{ComputeError, Result};
use crate::series::{CaseSeries, date_from_offset};
use crate::summary::forecast_summary;

/// A fitted least-squares line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTrend {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearTrend {
    /// Fits the line minimizing the sum of squared residuals over `points`.
    ///
    /// When every point has the same day offset the slope is zero and the
    /// intercept is the mean of the cases.
    pub fn fit(points: &[(i64, f64)]) -> Result<Self> {
        if points.len() < 2 {
            return Err(ComputeError::InsufficientData {
                points: points.len(),
            });
        }

        let first_day = points[0].0;
        if points.iter().all(|(day, _)| *day == first_day) {
            let mean = points.iter().map(|(_, cases)| *cases).sum::<f64>() / points.len() as f64;
            return Ok(Self {
                slope: 0.0,
                intercept: mean,
            });
        }

        let days = points.iter().map(|(day, _)| *day as f64).collect::<Vec<_>>();
        let cases = points.iter().map(|(_, cases)| *cases).collect::<Vec<_>>();

        let x = Array2::from_shape_vec((points.len(), 1), days)
            .map_err(|e| ComputeError::Regression(format!("Failed to build feature matrix: {}", e)))?;
        let y = Array1::from_vec(cases);
        let dataset = Dataset::new(x, y);

        let model = LinearRegression::default()
            .fit(&dataset)
            .map_err(|e| ComputeError::Regression(format!("Failed to fit linear model: {}", e)))?;

        let slope = model.params()[0];
        let intercept = model.intercept();

        Ok(Self { slope, intercept })
    }

    /// Value of the line at `day`.
    pub fn predict(&self, day: i64) -> f64 {
        self.slope * day as f64 + self.intercept
    }
}

/// Fits `points` and evaluates the line at the `horizon` offsets following
/// the largest observed offset.
pub fn project(points: &[(i64, f64)], horizon: u32) -> Result<(LinearTrend, Vec<(i64, f64)>)> {
    if horizon < 1 {
        return Err(ComputeError::InvalidHorizon {
            horizon: i64::from(horizon),
            max: None,
        });
    }

    let trend = LinearTrend::fit(points)?;
    let max_offset = points.iter().map(|(x, _)| *x).max().unwrap_or_default();
    let projected = (1..=i64::from(horizon))
        .map(|step| {
            let day = max_offset + step;
            (day, trend.predict(day))
        })
        .collect();

    Ok((trend, projected))
}

/// The outcome of forecasting one series.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub region: Region,
    pub disease: Disease,
    pub horizon: u32,
    pub trend: LinearTrend,
    /// Last observed date of the input series
    pub last_observed: NaiveDate,
    pub predictions: Vec<PredictionRecord>,
}

impl Forecast {
    /// Prediction for the last day of the horizon.
    pub fn final_prediction(&self) -> Option<f64> {
        self.predictions.last().map(|p| p.predicted_cases)
    }

    /// Human-readable summary of the final prediction.
    pub fn summary(&self) -> String {
        forecast_summary(
            self.region,
            self.disease,
            self.horizon,
            self.final_prediction().unwrap_or_default(),
        )
    }
}

/// Forecasts case series by linear trend extrapolation.
#[derive(Debug, Clone, Default)]
pub struct TrendForecaster {
    max_horizon: Option<u32>,
}

impl TrendForecaster {
    /// A forecaster accepting any horizon of at least one day.
    pub fn new() -> Self {
        Self::default()
    }

    /// A forecaster that also rejects horizons above `max_horizon`.
    pub fn with_max_horizon(max_horizon: u32) -> Self {
        Self {
            max_horizon: Some(max_horizon),
        }
    }

    pub fn max_horizon(&self) -> Option<u32> {
        self.max_horizon
    }

    /// Checks `horizon` against the accepted range.
    pub fn validate_horizon(&self, horizon: u32) -> Result<()> {
        let too_far = self.max_horizon.is_some_and(|max| horizon > max);
        if horizon < 1 || too_far {
            return Err(ComputeError::InvalidHorizon {
                horizon: i64::from(horizon),
                max: self.max_horizon,
            });
        }
        Ok(())
    }

    /// Converts a signed day count from user input into a validated horizon.
    pub fn horizon_from_days(&self, days: i64) -> Result<u32> {
        let horizon = u32::try_from(days).map_err(|_| ComputeError::InvalidHorizon {
            horizon: days,
            max: self.max_horizon,
        })?;
        self.validate_horizon(horizon)?;
        Ok(horizon)
    }

    /// Fits a trend to `series` and predicts the `horizon` days after its
    /// last observed date.
    #[instrument(skip(self, series), fields(region = %series.region(), disease = %series.disease(), points = series.len()))]
    pub fn forecast(&self, series: &CaseSeries, horizon: u32) -> Result<Forecast> {
        self.validate_horizon(horizon)?;

        let (origin, last_observed) = match (series.min_date(), series.max_date()) {
            (Some(origin), Some(last)) => (origin, last),
            _ => return Err(ComputeError::InsufficientData { points: 0 }),
        };

        let (trend, projected) = project(&series.day_offsets(), horizon)?;
        debug!(
            "Fitted trend slope={} intercept={} over {} points",
            trend.slope,
            trend.intercept,
            series.len()
        );

        let predictions = projected
            .into_iter()
            .map(|(day, value)| {
                date_from_offset(origin, day).map(|date| PredictionRecord::new(date, value))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Forecast {
            region: series.region(),
            disease: series.disease(),
            horizon,
            trend,
            last_observed,
            predictions,
        })
    }
}
