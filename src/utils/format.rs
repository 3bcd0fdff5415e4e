// src/utils/format.rs

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3600.0;
const DAY: f64 = 86400.0;
const YEAR: f64 = 31_536_000.0;
const TRILLION_YEARS: f64 = YEAR * 1e12;

// Format a crack time in seconds for display
pub fn format_crack_time(seconds: f64) -> String {
    if seconds < 1.0 {
        "Instant".to_string()
    } else if seconds < MINUTE {
        format!("{:.2} seconds", seconds)
    } else if seconds < HOUR {
        format!("{:.2} minutes", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{:.2} hours", seconds / HOUR)
    } else if seconds < YEAR {
        format!("{:.2} days", seconds / DAY)
    } else if seconds < YEAR * 1e3 {
        format!("{:.2} years", seconds / YEAR)
    } else if seconds < YEAR * 1e6 {
        format!("{:.2} thousand years", seconds / (YEAR * 1e3))
    } else if seconds < YEAR * 1e9 {
        format!("{:.2} million years", seconds / (YEAR * 1e6))
    } else if seconds < TRILLION_YEARS {
        format!("{:.2} billion years", seconds / (YEAR * 1e9))
    } else {
        scientific_trillion_years(seconds / TRILLION_YEARS)
    }
}

// Same label as the last tier of format_crack_time, for times too large for an f64
pub fn format_trillion_years(log10_seconds: f64) -> String {
    let value_log10 = log10_seconds - TRILLION_YEARS.log10();
    let value = 10f64.powf(value_log10);
    if value.is_finite() && value > 0.0 {
        return scientific_trillion_years(value);
    }

    let mut exponent = value_log10.floor();
    let mut mantissa = (10f64.powf(value_log10 - exponent) * 100.0).round() / 100.0;
    if mantissa >= 10.0 {
        mantissa /= 10.0;
        exponent += 1.0;
    }
    format!("{:.2}e{} trillion years", mantissa, exponent_suffix(exponent as i64))
}

fn exponent_suffix(exponent: i64) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}{:02}", sign, exponent.abs())
}

fn scientific_trillion_years(value: f64) -> String {
    let rendered = format!("{:.2e}", value);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i64 = exponent.parse().unwrap_or(0);
            format!("{}e{} trillion years", mantissa, exponent_suffix(exponent))
        }
        None => format!("{} trillion years", rendered),
    }
}

// Round to a fixed number of decimal places for display
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

// Truncate a string to max_chars characters, marking the cut with "..."
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}
