//! Text formatting for estimate results.

use num_format::{Locale, ToFormattedString};

/// Group digits in threes with commas, e.g. `168,500,000`.
pub fn format_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

/// `probability` as a percentage with exactly two decimals, without the
/// `%` sign: `0.012345` -> `"1.23"`.
pub fn format_percentage(probability: f64) -> String {
    format!("{:.2}", probability * 100.0)
}

/// Compact population figure for summary cards: `168.5M`, `12.3K`.
pub fn format_compact(n: u64) -> String {
    match n {
        0..=999 => n.to_string(),
        1_000..=999_999 => format!("{:.1}K", n as f64 / 1e3),
        1_000_000..=999_999_999 => format!("{:.1}M", n as f64 / 1e6),
        _ => format!("{:.1}B", n as f64 / 1e9),
    }
}
