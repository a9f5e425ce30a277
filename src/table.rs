//! Table Utilities
//!
//! Filtering, column resolution and header labels for the collection table.

use crate::models::{cell_text, record_text, Record, SERIAL_KEY};

/// Case-insensitive substring match against every field of `record`
pub fn record_matches(record: &Record, needle_lower: &str) -> bool {
    record
        .values()
        .any(|value| cell_text(value).to_lowercase().contains(needle_lower))
}

/// Records matching `query`; a blank query keeps everything
pub fn filter_records(records: &[Record], query: &str) -> Vec<Record> {
    if query.trim().is_empty() {
        return records.to_vec();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record_matches(record, &needle))
        .cloned()
        .collect()
}

/// Columns to render: the declared list, else the keys of the first row
pub fn resolve_columns(rows: &[Record], declared: &[String]) -> Vec<String> {
    if !declared.is_empty() {
        return declared.to_vec();
    }
    rows.first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default()
}

/// Declared columns followed by any extra keys the record carries
pub fn union_columns(declared: &[String], record: &Record) -> Vec<String> {
    let mut columns: Vec<String> = Vec::with_capacity(declared.len() + record.len());
    for column in declared.iter().chain(record.keys()) {
        if column.trim().is_empty() || columns.contains(column) {
            continue;
        }
        columns.push(column.clone());
    }
    columns
}

/// Header label: splits camelCase, capitalizes the first letter
pub fn format_column_name(column: &str) -> String {
    let mut spaced = String::with_capacity(column.len() + 4);
    let mut prev_lower = false;
    for c in column.chars() {
        if c.is_uppercase() && prev_lower {
            spaced.push(' ');
        }
        prev_lower = c.is_lowercase();
        spaced.push(c);
    }

    let collapsed = spaced.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = collapsed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Identifying lines for the delete confirmation
pub fn delete_summary(record: &Record, columns: &[String]) -> Vec<(String, String)> {
    let model_name = record_text(record, "Model Name");
    let mut lines = vec![
        ("Serial Number".to_string(), record_text(record, SERIAL_KEY)),
        (
            "Model Name".to_string(),
            if model_name.is_empty() { "Unknown".to_string() } else { model_name },
        ),
    ];
    for column in columns {
        if column == SERIAL_KEY || column == "Model Name" {
            continue;
        }
        let value = record_text(record, column);
        if !value.is_empty() {
            lines.push((column.clone(), value));
        }
    }
    lines
}
