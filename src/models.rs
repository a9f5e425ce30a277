//! Frontend Models
//!
//! Data structures matching backend payloads.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::format::text_cell;

/// Backend-assigned key column
pub const SERIAL_KEY: &str = "S.No";

/// One collection row: column name -> scalar, in backend column order
pub type Record = Map<String, Value>;

/// Text form of a cell (null -> "", objects -> JSON text)
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Text form of a record's column, "" when missing
pub fn record_text(record: &Record, column: &str) -> String {
    record.get(column).map(cell_text).unwrap_or_default()
}

/// Payload of `GET /api/data`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub data: Vec<Record>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub total_records: Option<usize>,
}

impl Dataset {
    pub fn total(&self) -> usize {
        self.total_records.unwrap_or(self.data.len())
    }
}

/// A series and its subseries, in backend order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub name: String,
    pub subseries: Vec<String>,
}

/// Payload of `GET /api/dropdown-options`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownOptions {
    pub series: Vec<Series>,
}

impl DropdownOptions {
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let series = map
            .iter()
            .map(|(name, subs)| Series {
                name: name.clone(),
                subseries: subs
                    .as_array()
                    .map(|items| items.iter().map(cell_text).collect())
                    .unwrap_or_default(),
            })
            .collect();
        Self { series }
    }

    pub fn series_names(&self) -> Vec<String> {
        self.series.iter().map(|s| s.name.clone()).collect()
    }

    /// Subseries of `series`, empty when unknown or unset
    pub fn subseries_of(&self, series: &str) -> Vec<String> {
        self.series
            .iter()
            .find(|s| s.name == series)
            .map(|s| s.subseries.clone())
            .unwrap_or_default()
    }
}

/// Preorder delivery state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum DeliveryStatus {
    #[default]
    Pending,
    Shipped,
    Delivered,
}

impl DeliveryStatus {
    pub const ALL: [DeliveryStatus; 3] = [Self::Pending, Self::Shipped, Self::Delivered];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
        }
    }

    /// Case-insensitive; anything unrecognised is Pending
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "shipped" => Self::Shipped,
            "delivered" => Self::Delivered,
            _ => Self::Pending,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Pending => "status-pending",
            Self::Shipped => "status-shipped",
            Self::Delivered => "status-delivered",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preorder row (fixed schema)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Preorder {
    /// Blank in sheets with hand-entered rows
    #[serde(rename = "S.No", default, deserialize_with = "de::serial")]
    pub serial: Option<i64>,
    #[serde(rename = "Seller", default, deserialize_with = "de::text")]
    pub seller: Option<String>,
    #[serde(rename = "Models", default, deserialize_with = "de::text")]
    pub models: Option<String>,
    #[serde(rename = "ETA", default, deserialize_with = "de::text")]
    pub eta: Option<String>,
    #[serde(rename = "Total Price", default, deserialize_with = "de::amount")]
    pub total_price: Option<f64>,
    #[serde(rename = "PO Amount", default, deserialize_with = "de::amount")]
    pub po_amount: Option<f64>,
    #[serde(rename = "On Arrival Amount", default, deserialize_with = "de::amount")]
    pub on_arrival_amount: Option<f64>,
    #[serde(rename = "Delivery Status", default, deserialize_with = "de::status")]
    pub delivery_status: DeliveryStatus,
}

impl Preorder {
    /// Serial as shown in the table, `N/A` when blank
    pub fn serial_label(&self) -> String {
        text_cell(self.serial.map(|serial| serial.to_string()).as_deref())
    }

    /// Payload that rewrites this preorder with a different status
    pub fn with_status(&self, status: DeliveryStatus) -> PreorderPayload {
        PreorderPayload {
            seller: self.seller.clone().unwrap_or_default(),
            models: self.models.clone().unwrap_or_default(),
            eta: self.eta.clone(),
            total_price: self.total_price,
            po_amount: self.po_amount,
            on_arrival_amount: self.on_arrival_amount,
            delivery_status: status,
        }
    }
}

/// Body of `POST /api/preorders` and `PUT /api/preorders/{serial}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreorderPayload {
    pub seller: String,
    pub models: String,
    pub eta: Option<String>,
    pub total_price: Option<f64>,
    pub po_amount: Option<f64>,
    pub on_arrival_amount: Option<f64>,
    pub delivery_status: DeliveryStatus,
}

/// Server-computed preorder aggregates
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub total_preorders: u64,
    #[serde(default)]
    pub total_value: f64,
    #[serde(default)]
    pub total_po_amount: f64,
    #[serde(default)]
    pub total_on_arrival: f64,
    #[serde(default)]
    pub payment_done: f64,
    #[serde(default)]
    pub payment_remaining: f64,
    #[serde(default)]
    pub status_breakdown: BTreeMap<String, u64>,
    #[serde(default)]
    pub upcoming_arrivals: Vec<UpcomingArrival>,
}

impl Statistics {
    /// Placeholder shown when the statistics call fails
    pub fn zeroed() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpcomingArrival {
    #[serde(default, deserialize_with = "de::text")]
    pub serial: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub models: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub eta: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub seller: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub status: Option<String>,
}

/// Lenient field decoders; spreadsheet-backed rows mix numbers and strings
mod de {
    use super::*;

    pub fn serial<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        let value = Value::deserialize(d)?;
        let parsed = match &value {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => s.trim().parse::<f64>().ok().map(|f| f as i64),
            _ => None,
        };
        if parsed.is_none() && !cell_text(&value).trim().is_empty() {
            log::warn!("[models] Unreadable serial number {}", value);
        }
        Ok(parsed)
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let value = Value::deserialize(d)?;
        let text = cell_text(&value);
        Ok(if text.is_empty() { None } else { Some(text) })
    }

    pub fn amount<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(parse_amount(&Value::deserialize(d)?))
    }

    pub fn status<'de, D: Deserializer<'de>>(d: D) -> Result<DeliveryStatus, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(DeliveryStatus::from_label(&cell_text(&value)))
    }

    pub fn parse_amount(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => {
                let cleaned: String = s
                    .chars()
                    .filter(|c| !matches!(c, '₹' | '$' | ',') && !c.is_whitespace())
                    .collect();
                if cleaned.is_empty() || cleaned == "-" || cleaned.eq_ignore_ascii_case("nan") {
                    None
                } else {
                    cleaned.parse().ok()
                }
            }
            _ => None,
        }
    }
}
