//! CSV Export
//!
//! Serializes the filtered table and hands it to the browser as a download.

use chrono::NaiveDate;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::config::CSV_FILENAME_PREFIX;
use crate::models::{record_text, Record};

/// Every column that appears in `rows`, first row's order first
pub fn export_columns(rows: &[Record]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for key in rows.iter().flat_map(|row| row.keys()) {
        if !columns.contains(key) {
            columns.push(key.clone());
        }
    }
    columns
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Quoted CSV of `rows`, or None when there is nothing to export
pub fn to_csv(rows: &[Record]) -> Option<String> {
    if rows.is_empty() {
        return None;
    }
    let columns = export_columns(rows);
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(columns.iter().map(|c| quote(c)).collect::<Vec<_>>().join(","));
    for row in rows {
        lines.push(
            columns
                .iter()
                .map(|c| quote(&record_text(row, c)))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    Some(lines.join("\n"))
}

pub fn export_filename(date: NaiveDate) -> String {
    format!("{}{}.csv", CSV_FILENAME_PREFIX, date.format("%Y-%m-%d"))
}

/// Trigger a browser download of `csv`
pub fn download_csv(csv: &str, filename: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(csv));

    let props = BlobPropertyBag::new();
    props.set_type("text/csv;charset=utf-8;");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &props)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create URL: {:?}", e))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;
    let link = document
        .create_element("a")
        .map_err(|e| format!("Failed to create element: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;
    link.set_href(&url);
    link.set_download(filename);

    let body = document.body().ok_or_else(|| "no body".to_string())?;
    body.append_child(&link)
        .map_err(|e| format!("Failed to attach link: {:?}", e))?;
    link.click();
    if let Err(e) = body.remove_child(&link) {
        log::warn!("[export] Failed to detach download link: {:?}", e);
    }

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))
}
