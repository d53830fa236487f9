use model::{Disease, Region};

/// Formats an integer with comma thousands separators, e.g. `-1,234,567`.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

/// Summary line for a forecast, with the final value rounded to the nearest
/// whole case.
pub fn forecast_summary(region: Region, disease: Disease, horizon: u32, final_value: f64) -> String {
    format!(
        "Predicted number of {} cases in {} after {} days: {}",
        disease,
        region,
        horizon,
        format_thousands(final_value.round() as i64)
    )
}
