use common::{
    CasePoint, CaseTimeseries, DatasetOverview, DateRange, ForecastReport, PredictionPoint,
    SeriesOverviewRow, TrendLine,
};
use compute::dataset::CaseDataset;
use compute::forecast::Forecast;
use compute::overview::SeriesOverview;
use compute::series::CaseSeries;

/// Converts a filtered series into its chart payload.
pub fn series_to_timeseries(series: &CaseSeries) -> CaseTimeseries {
    let points = series
        .points()
        .iter()
        .map(|(date, cases)| CasePoint::new(*date, *cases))
        .collect();

    CaseTimeseries::new(
        series.region().to_string(),
        series.disease().to_string(),
        points,
    )
}

/// Bundles a forecast with the series it was fitted on.
pub fn forecast_to_report(series: &CaseSeries, forecast: &Forecast) -> ForecastReport {
    let predictions = forecast
        .predictions
        .iter()
        .map(|prediction| PredictionPoint {
            date: prediction.date,
            predicted_cases: prediction.predicted_cases,
        })
        .collect();

    ForecastReport {
        region: forecast.region.to_string(),
        disease: forecast.disease.to_string(),
        horizon: forecast.horizon,
        trend: TrendLine {
            slope: forecast.trend.slope,
            intercept: forecast.trend.intercept,
        },
        history: series_to_timeseries(series),
        predictions,
        final_prediction: forecast.final_prediction().unwrap_or_default(),
        summary: forecast.summary(),
    }
}

/// Converts the per-series aggregates into the overview payload.
pub fn overview_to_dto(dataset: &CaseDataset, rows: Vec<SeriesOverview>) -> DatasetOverview {
    DatasetOverview {
        date_range: DateRange {
            start: dataset.start_date(),
            end: dataset.end_date(),
        },
        rows: dataset.len(),
        series: rows
            .into_iter()
            .map(|row| SeriesOverviewRow {
                region: row.region.to_string(),
                disease: row.disease.to_string(),
                days: row.days,
                latest_cases: row.latest_cases,
                peak_cases: row.peak_cases,
                mean_cases: row.mean_cases,
            })
            .collect(),
    }
}
