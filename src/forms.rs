//! Form Models
//!
//! Client-side validation and the dynamic edit form. Nothing here touches
//! the DOM; components bind inputs to these types.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::api::NewModel;
use crate::config::{FIELD_NAME_MAX_LEN, FORBIDDEN_FIELD_CHARS};
use crate::error::ValidationError;
use crate::models::{record_text, DeliveryStatus, Preorder, PreorderPayload, Record, SERIAL_KEY};
use crate::table::union_columns;

/// Literal the user must type before anything is deleted
pub const DELETE_CONFIRMATION: &str = "DELETE";

static WHITESPACE: OnceLock<Regex> = OnceLock::new();
static NON_WORD: OnceLock<Regex> = OnceLock::new();

/// DOM id for an edit input: `edit-` + column with whitespace runs as `_`
/// and everything outside `[A-Za-z0-9_-]` dropped
pub fn field_id(column: &str) -> String {
    let whitespace = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid pattern"));
    let non_word = NON_WORD.get_or_init(|| Regex::new(r"[^A-Za-z0-9_\-]").expect("valid pattern"));
    let underscored = whitespace.replace_all(column, "_");
    format!("edit-{}", non_word.replace_all(&underscored, ""))
}

/// One editable column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditField {
    pub id: String,
    pub column: String,
    pub original: String,
}

/// Sanitized input id -> column, built once per modal open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    fields: Vec<EditField>,
}

impl FieldMap {
    /// Columns that sanitize to the same id get a numeric suffix
    pub fn build(columns: &[String], record: &Record) -> Self {
        let mut fields: Vec<EditField> = Vec::with_capacity(columns.len());
        for column in columns {
            if column == SERIAL_KEY || column.trim().is_empty() {
                continue;
            }
            let base = field_id(column);
            let mut id = base.clone();
            let mut n = 2;
            while fields.iter().any(|f| f.id == id) {
                id = format!("{}-{}", base, n);
                n += 1;
            }
            fields.push(EditField {
                id,
                column: column.clone(),
                original: record_text(record, column),
            });
        }
        Self { fields }
    }

    pub fn fields(&self) -> &[EditField] {
        &self.fields
    }

    pub fn column_for(&self, id: &str) -> Option<&str> {
        self.fields.iter().find(|f| f.id == id).map(|f| f.column.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Edit modal contents for one record
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    pub serial: Value,
    pub fields: FieldMap,
}

impl EditForm {
    /// One field per column in the union of declared columns and row keys
    pub fn open(record: &Record, declared: &[String]) -> Self {
        let columns = union_columns(declared, record);
        Self {
            serial: record.get(SERIAL_KEY).cloned().unwrap_or(Value::Null),
            fields: FieldMap::build(&columns, record),
        }
    }

    /// Columns whose trimmed value changed; `submitted` is keyed by input id
    pub fn diff(&self, submitted: &[(String, String)]) -> Map<String, Value> {
        let mut updates = Map::new();
        for (id, value) in submitted {
            let Some(field) = self.fields.fields.iter().find(|f| &f.id == id) else {
                continue;
            };
            let new_value = value.trim();
            if new_value != field.original.trim() {
                updates.insert(field.column.clone(), Value::String(new_value.to_string()));
            }
        }
        updates
    }

    /// Like `diff`, but an empty diff is an error so no request goes out
    pub fn updates(&self, submitted: &[(String, String)]) -> Result<Map<String, Value>, ValidationError> {
        let updates = self.diff(submitted);
        if updates.is_empty() {
            return Err(ValidationError::NoChanges);
        }
        Ok(updates)
    }
}

/// Only the exact literal `DELETE` passes
pub fn check_delete_confirmation(input: &str) -> Result<(), ValidationError> {
    if input == DELETE_CONFIRMATION {
        Ok(())
    } else {
        Err(ValidationError::ConfirmationMismatch)
    }
}

/// Trimmed field name, or why it is rejected
pub fn validate_field_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyFieldName);
    }
    if name.chars().count() > FIELD_NAME_MAX_LEN {
        return Err(ValidationError::FieldNameTooLong { max: FIELD_NAME_MAX_LEN });
    }
    if name.contains(FORBIDDEN_FIELD_CHARS) {
        return Err(ValidationError::InvalidFieldChars);
    }
    Ok(name.to_string())
}

pub fn validate_new_model(model_name: &str, series: &str, subseries: &str) -> Result<NewModel, ValidationError> {
    let model_name = model_name.trim();
    if model_name.is_empty() || series.trim().is_empty() || subseries.trim().is_empty() {
        return Err(ValidationError::MissingRequired("Please fill in all required fields."));
    }
    Ok(NewModel {
        model_name: model_name.to_string(),
        series: series.to_string(),
        subseries: subseries.to_string(),
    })
}

/// Subseries selector state derived from the chosen series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubseriesChoice {
    pub placeholder: &'static str,
    pub options: Vec<String>,
    pub enabled: bool,
}

impl SubseriesChoice {
    pub fn for_series(series: &str, options: Vec<String>) -> Self {
        if series.is_empty() {
            Self { placeholder: "Select Series first...", options: Vec::new(), enabled: false }
        } else {
            Self { placeholder: "Select Subseries...", options, enabled: true }
        }
    }
}

/// Add/edit preorder modal; `serial` mirrors the hidden serial input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreorderForm {
    pub serial: Option<i64>,
    pub seller: String,
    pub models: String,
    pub eta: String,
    pub total_price: String,
    pub po_amount: String,
    pub on_arrival_amount: String,
    pub delivery_status: DeliveryStatus,
}

fn amount_input(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn parse_amount(raw: &str, field: &'static str) -> Result<Option<f64>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(ValidationError::InvalidNumber { field }),
    }
}

impl PreorderForm {
    /// Blank form for a new preorder
    pub fn create() -> Self {
        Self::default()
    }

    /// Form pre-filled from an existing preorder; rows without a serial
    /// cannot be updated
    pub fn edit(preorder: &Preorder) -> Option<Self> {
        Some(Self {
            serial: Some(preorder.serial?),
            seller: preorder.seller.clone().unwrap_or_default(),
            models: preorder.models.clone().unwrap_or_default(),
            eta: preorder.eta.clone().unwrap_or_default(),
            total_price: amount_input(preorder.total_price),
            po_amount: amount_input(preorder.po_amount),
            on_arrival_amount: amount_input(preorder.on_arrival_amount),
            delivery_status: preorder.delivery_status,
        })
    }

    pub fn is_edit(&self) -> bool {
        self.serial.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() { "Edit Preorder" } else { "Add Preorder" }
    }

    pub fn to_payload(&self) -> Result<PreorderPayload, ValidationError> {
        let seller = self.seller.trim();
        let models = self.models.trim();
        if seller.is_empty() || models.is_empty() {
            return Err(ValidationError::MissingRequired(
                "Please fill in all required fields (Seller and Models).",
            ));
        }
        let eta = self.eta.trim();
        Ok(PreorderPayload {
            seller: seller.to_string(),
            models: models.to_string(),
            eta: if eta.is_empty() { None } else { Some(eta.to_string()) },
            total_price: parse_amount(&self.total_price, "Total Price")?,
            po_amount: parse_amount(&self.po_amount, "PO Amount")?,
            on_arrival_amount: parse_amount(&self.on_arrival_amount, "On Arrival Amount")?,
            delivery_status: self.delivery_status,
        })
    }
}
