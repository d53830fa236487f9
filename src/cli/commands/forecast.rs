use std::fmt::Write;

use anyhow::{Context, Result};
use compute::generator::seeded_rng;
use tracing::{debug, instrument};

use crate::config::AppConfig;

#[instrument(skip(config))]
pub fn forecast(
    config: &AppConfig,
    region: &str,
    disease: &str,
    days: u32,
    history: usize,
) -> Result<()> {
    print!("{}", render_forecast(config, region, disease, days, history)?);
    Ok(())
}

/// Builds the forecast report printed by the `forecast` subcommand.
fn render_forecast(
    config: &AppConfig,
    region: &str,
    disease: &str,
    days: u32,
    history: usize,
) -> Result<String> {
    let dataset = config
        .generator()
        .generate(&mut seeded_rng(config.seed))
        .context("Failed to generate case dataset")?;

    let series = dataset.series_by_label(region, disease)?;
    let forecast = config
        .forecaster()
        .forecast(&series, days)
        .with_context(|| format!("Failed to forecast {} cases in {}", disease, region))?;
    debug!(
        "Trend slope={} intercept={}",
        forecast.trend.slope, forecast.trend.intercept
    );

    let mut out = String::new();
    let shown = history.min(series.len());
    writeln!(
        out,
        "Historical {} cases in {} (last {} of {} days)",
        series.disease(),
        series.region(),
        shown,
        series.len()
    )?;
    for (date, cases) in &series.points()[series.len() - shown..] {
        writeln!(out, "  {}  {:>14.2}", date, cases)?;
    }

    writeln!(out)?;
    writeln!(out, "{} case predictions in {}", series.disease(), series.region())?;
    for prediction in &forecast.predictions {
        writeln!(out, "  {}  {:>14.2}", prediction.date, prediction.predicted_cases)?;
    }

    writeln!(out)?;
    writeln!(out, "Trend: {:+.2} cases/day", forecast.trend.slope)?;
    writeln!(out, "Summary: {}", forecast.summary())?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils::test_config;

    #[test]
    fn test_history_longer_than_series_shows_everything() {
        let output = render_forecast(&test_config(), "Delhi", "Flu", 3, 1000).unwrap();

        assert!(output.starts_with("Historical Flu cases in Delhi (last 91 of 91 days)\n"));
        assert!(output.contains("  2024-01-01  "));
        assert!(output.contains("  2024-03-31  "));
        assert!(output.contains("Flu case predictions in Delhi\n  2024-04-01  "));
        assert!(output.contains("  2024-04-03  "));
        assert!(!output.contains("  2024-04-04  "));
        assert!(output.contains("Summary: Predicted number of Flu cases in Delhi after 3 days: "));
    }

    #[test]
    fn test_history_tail() {
        let output = render_forecast(&test_config(), "Chennai", "COVID-19", 7, 2).unwrap();

        assert!(output.starts_with("Historical COVID-19 cases in Chennai (last 2 of 91 days)\n"));
        assert!(output.contains("  2024-03-30  "));
        assert!(output.contains("  2024-03-31  "));
        assert!(!output.contains("  2024-03-29  "));
    }

    #[test]
    fn test_zero_history() {
        let output = render_forecast(&test_config(), "Mumbai", "Dengue", 1, 0).unwrap();
        assert!(output.starts_with("Historical Dengue cases in Mumbai (last 0 of 91 days)\n\n"));
    }

    #[test]
    fn test_unknown_label_fails() {
        let err = render_forecast(&test_config(), "Pune", "Flu", 7, 14).unwrap_err();
        assert_eq!(err.to_string(), "Unknown region: 'Pune'");

        let err = render_forecast(&test_config(), "Delhi", "Malaria", 7, 14).unwrap_err();
        assert_eq!(err.to_string(), "Unknown disease: 'Malaria'");
    }

    #[test]
    fn test_invalid_horizon_fails() {
        let err = render_forecast(&test_config(), "Delhi", "Flu", 31, 14).unwrap_err();
        assert_eq!(err.to_string(), "Failed to forecast Flu cases in Delhi");
        assert_eq!(
            err.root_cause().to_string(),
            "Invalid horizon: 31 days (must be between 1 and 30)"
        );
    }
}
