//! Display Formatting
//!
//! ETA months and rupee amounts for the preorder board.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

const NOT_AVAILABLE: &str = "N/A";

static YEAR_MONTH: OnceLock<Regex> = OnceLock::new();

fn year_month() -> &'static Regex {
    YEAR_MONTH.get_or_init(|| Regex::new(r"^(\d{4})-(\d{2})$").expect("valid ETA pattern"))
}

/// `2025-03-15` -> `Mar 2025`; other text is shown verbatim, nothing is `N/A`
pub fn format_eta(eta: Option<&str>) -> String {
    let Some(eta) = eta.map(str::trim).filter(|s| !s.is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };
    let prefix: String = eta.chars().take(7).collect();
    let month = year_month().captures(&prefix).and_then(|caps| {
        let year = caps[1].parse::<i32>().ok()?;
        let month = caps[2].parse::<u32>().ok()?;
        NaiveDate::from_ymd_opt(year, month, 1)
    });
    match month {
        Some(date) => date.format("%b %Y").to_string(),
        None => eta.to_string(),
    }
}

/// Indian digit grouping, at most two decimals, no trailing zeros
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = group_indian(int_part);
    if !frac.is_empty() {
        grouped.push('.');
        grouped.push_str(frac);
    }
    if value < 0.0 && grouped != "0" {
        grouped.insert(0, '-');
    }
    grouped
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Table cell for a money column
pub fn money_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("₹{}", format_amount(v)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Table cell for a text column
pub fn text_cell(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
