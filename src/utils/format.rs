//! Formatting utilities for package sizes and publication dates.

use crate::config::{DATE_DISPLAY_FORMAT, MISSING_VALUE, package_size};
use crate::models::PublishedDate;
use crate::utils::parse_float_prefix;

/// Format a package size given in megabytes (e.g. "512 MB", "1.5 GB").
///
/// At most two decimals are kept and trailing zeros are dropped.
/// Unparseable sizes render as a placeholder.
pub fn format_package_size(size: &str) -> String {
    let megabytes = parse_float_prefix(size);
    if megabytes.is_nan() {
        return MISSING_VALUE.to_string();
    }
    if megabytes == 0.0 {
        return format!("0 {}", package_size::UNITS[0]);
    }

    let last = package_size::UNITS.len() - 1;
    let exponent = (megabytes.abs().ln() / package_size::UNIT_STEP.ln()).floor();
    let unit = exponent.clamp(0.0, last as f64) as usize;
    let scaled = megabytes / package_size::UNIT_STEP.powi(unit as i32);

    format!("{} {}", trim_decimals(scaled), package_size::UNITS[unit])
}

/// Render with two decimals, then drop trailing zeros and a bare point.
fn trim_decimals(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Format a publication date for the results table.
pub fn format_published_date(date: &PublishedDate) -> String {
    match date.datetime() {
        Some(datetime) => datetime.format(DATE_DISPLAY_FORMAT).to_string(),
        None => MISSING_VALUE.to_string(),
    }
}
