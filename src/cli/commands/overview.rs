use std::fmt::Write;

use anyhow::{Context, Result};
use compute::generator::seeded_rng;
use compute::overview::compute_overview;
use compute::summary::format_thousands;

use crate::config::AppConfig;

pub fn overview(config: &AppConfig) -> Result<()> {
    print!("{}", render_overview(config)?);
    Ok(())
}

/// Builds the per-series table printed by the `overview` subcommand.
fn render_overview(config: &AppConfig) -> Result<String> {
    let dataset = config
        .generator()
        .generate(&mut seeded_rng(config.seed))
        .context("Failed to generate case dataset")?;
    let rows = compute_overview(&dataset)?;

    let mut out = String::new();
    writeln!(
        out,
        "Case overview from {} to {} ({} rows)",
        dataset.start_date(),
        dataset.end_date(),
        dataset.len()
    )?;
    writeln!(
        out,
        "  {:<10} {:<9} {:>6} {:>12} {:>12} {:>12}",
        "Region", "Disease", "Days", "Latest", "Peak", "Mean"
    )?;
    for row in rows {
        writeln!(
            out,
            "  {:<10} {:<9} {:>6} {:>12} {:>12} {:>12}",
            row.region.as_str(),
            row.disease.as_str(),
            row.days,
            format_thousands(row.latest_cases.round() as i64),
            format_thousands(row.peak_cases.round() as i64),
            format_thousands(row.mean_cases.round() as i64),
        )?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils::test_config;

    #[test]
    fn test_overview_table() {
        let output = render_overview(&test_config()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Case overview from 2024-01-01 to 2024-03-31 (1365 rows)");
        assert!(lines[1].trim_start().starts_with("Region"));
        // header plus one row per region and disease
        assert_eq!(lines.len(), 2 + 15);
        assert!(lines[2].trim_start().starts_with("Delhi      Flu"));
        assert!(lines[16].trim_start().starts_with("Hyderabad  COVID-19"));
        assert!(lines[2..].iter().all(|line| line.contains("    91 ")));
    }

    #[test]
    fn test_overview_is_reproducible_for_a_seed() {
        let config = test_config();
        assert_eq!(render_overview(&config).unwrap(), render_overview(&config).unwrap());
    }
}
