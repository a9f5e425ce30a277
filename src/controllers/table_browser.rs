//! Collection Table Controller
//!
//! Loads the collection, filters it client-side, and runs the edit and
//! delete flows. `TableState` is the page store; `TableBrowser` talks to
//! the backend.

use std::rc::Rc;

use reactive_stores::Store;
use serde_json::Value;

use crate::api::{Api, HttpClient};
use crate::error::{ActionError, ApiResult};
use crate::export::to_csv;
use crate::forms::{check_delete_confirmation, EditForm};
use crate::models::{Dataset, Record, SERIAL_KEY};
use crate::table::{filter_records, resolve_columns};

/// Home page state with field-level reactivity
#[derive(Debug, Clone, Default, PartialEq, Store)]
pub struct TableState {
    /// Last loaded records, backend order
    pub records: Vec<Record>,
    /// Backend-declared column list
    pub columns: Vec<String>,
    pub total_records: usize,
    /// Active search text
    pub query: String,
    pub loading: bool,
    /// Inline load error
    pub error: Option<String>,
}

impl TableState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace the cache on success; every outcome clears `loading`
    pub fn finish_load(&mut self, result: ApiResult<Dataset>) {
        self.loading = false;
        match result {
            Ok(dataset) => {
                self.total_records = dataset.total();
                self.records = dataset.data;
                self.columns = dataset.columns;
            }
            Err(e) => {
                self.error = Some(format!("Failed to load data: {}", e));
            }
        }
    }

    pub fn search(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_search(&mut self) {
        self.query.clear();
    }

    /// Cache filtered by the current query
    pub fn filtered(&self) -> Vec<Record> {
        filter_records(&self.records, &self.query)
    }

    pub fn display_columns(&self, rows: &[Record]) -> Vec<String> {
        resolve_columns(rows, &self.columns)
    }

    /// CSV of the filtered view, None when it is empty
    pub fn export(&self) -> Option<String> {
        to_csv(&self.filtered())
    }
}

/// Backend side of the home page
#[derive(Clone)]
pub struct TableBrowser {
    api: Api,
}

impl TableBrowser {
    pub fn new(client: Rc<dyn HttpClient>) -> Self {
        Self { api: Api::new(client) }
    }

    pub async fn load(&self) -> ApiResult<Dataset> {
        let dataset = self.api.list_records().await?;
        log::info!("[TableBrowser] Loaded {} records", dataset.data.len());
        Ok(dataset)
    }

    /// Send the changed columns of `form`; nothing is sent when none changed
    pub async fn save_edit(&self, form: &EditForm, submitted: &[(String, String)]) -> Result<String, ActionError> {
        let updates = form.updates(submitted)?;
        log::info!("[TableBrowser] Updating {} with {} changed fields", form.serial, updates.len());
        let ack = self.api.update_model(&form.serial, &updates).await?;
        Ok(ack.message_or("Model updated successfully"))
    }

    /// Delete `record` once `confirmation` is exactly `DELETE`
    pub async fn delete(&self, record: &Record, confirmation: &str) -> Result<String, ActionError> {
        check_delete_confirmation(confirmation)?;
        let serial = record.get(SERIAL_KEY).cloned().unwrap_or(Value::Null);
        log::info!("[TableBrowser] Deleting {}", serial);
        let ack = self.api.delete_model(&serial).await?;
        Ok(ack.message_or("Model deleted successfully"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::api::mock::{GatedClient, MockClient};
    use crate::api::Method;
    use crate::controllers::fixtures::{failed, ok};
    use crate::error::{ApiError, ValidationError};
    use serde_json::json;

    fn dataset() -> Value {
        ok(json!({
            "data": [
                {"S.No": 1, "Model Name": "Skyline", "Series": "Mainline"},
                {"S.No": 2, "Model Name": "Civic", "Series": "Premium"}
            ],
            "columns": ["S.No", "Model Name", "Series"],
            "total_records": 2
        }))
    }

    /// Same begin/load/finish cycle the collection page runs
    async fn refresh(browser: &TableBrowser, state: &RefCell<TableState>) {
        state.borrow_mut().begin_load();
        let result = browser.load().await;
        state.borrow_mut().finish_load(result);
    }

    fn first_record() -> Record {
        json!({"S.No": 1, "Model Name": "Skyline", "Series": "Mainline"})
            .as_object()
            .cloned()
            .unwrap()
    }

    #[tokio::test]
    async fn test_refresh_fills_cache() {
        let client = MockClient::new();
        client.reply("/api/data", dataset());
        let browser = TableBrowser::new(client.clone());
        let state = RefCell::new(TableState::default());

        refresh(&browser, &state).await;
        let state = state.into_inner();

        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.records.len(), 2);
        assert_eq!(state.total_records, 2);
        assert_eq!(state.columns, vec!["S.No", "Model Name", "Series"]);
    }

    #[tokio::test]
    async fn test_loading_cleared_on_api_failure() {
        let client = MockClient::new();
        client.reply("/api/data", failed("Excel file not found"));
        let browser = TableBrowser::new(client.clone());
        let state = RefCell::new(TableState::default());

        refresh(&browser, &state).await;
        let state = state.into_inner();

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to load data: Excel file not found"));
    }

    #[tokio::test]
    async fn test_loading_cleared_on_transport_failure() {
        let client = MockClient::new();
        client.fail("/api/data", ApiError::Transport("connection refused".into()));
        let browser = TableBrowser::new(client.clone());
        let state = RefCell::new(TableState { records: vec![first_record()], ..Default::default() });

        refresh(&browser, &state).await;
        let state = state.into_inner();

        assert!(!state.loading);
        assert!(state.error.unwrap().starts_with("Failed to load data: network error"));
        // previous cache is kept
        assert_eq!(state.records.len(), 1);
    }

    #[tokio::test]
    async fn test_search_runs_against_cache_without_fetching() {
        let client = MockClient::new();
        client.reply("/api/data", dataset());
        let browser = TableBrowser::new(client.clone());
        let state = RefCell::new(TableState::default());
        refresh(&browser, &state).await;
        let mut state = state.into_inner();

        state.search("PREMIUM");
        let rows = state.filtered();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["Model Name"], json!("Civic"));

        state.clear_search();
        assert_eq!(state.filtered().len(), 2);
        assert_eq!(client.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_overlapping_loads_last_response_wins() {
        let client = GatedClient::new();
        let first = client.gate("/api/data");
        let second = client.gate("/api/data");
        let browser = TableBrowser::new(client.clone());
        let state = RefCell::new(TableState::default());

        let stale = ok(json!({"data": [{"S.No": 1, "Model Name": "Skyline"}], "columns": ["S.No", "Model Name"]}));
        let fresh = ok(json!({
            "data": [{"S.No": 1, "Model Name": "Skyline"}, {"S.No": 2, "Model Name": "Civic"}],
            "columns": ["S.No", "Model Name"]
        }));

        // the second request answers first, then the earlier one lands
        let release = async {
            second.send(Ok(fresh.to_string())).unwrap();
            tokio::task::yield_now().await;
            assert_eq!(state.borrow().records.len(), 2);
            first.send(Ok(stale.to_string())).unwrap();
        };
        futures::join!(refresh(&browser, &state), refresh(&browser, &state), release);

        let state = state.into_inner();
        assert!(!state.loading);
        assert_eq!(state.records.len(), 1);
        assert_eq!(state.records[0]["Model Name"], json!("Skyline"));
    }

    #[test]
    fn test_export_uses_filtered_view() {
        let mut state = TableState::default();
        state.finish_load(Ok(serde_json::from_value(dataset()).unwrap()));
        state.search("civic");
        let csv = state.export().unwrap();
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.contains("\"Civic\""));
        assert!(!csv.contains("Skyline"));

        state.search("nothing matches this");
        assert!(state.export().is_none());
    }

    #[test]
    fn test_display_columns_fall_back_to_first_row() {
        let state = TableState::default();
        let rows = vec![first_record()];
        assert_eq!(state.display_columns(&rows), vec!["S.No", "Model Name", "Series"]);
    }

    #[tokio::test]
    async fn test_save_edit_sends_only_diff() {
        let client = MockClient::new();
        client.reply("/api/update-model", ok(json!({"message": "Model updated"})));
        let browser = TableBrowser::new(client.clone());
        let form = EditForm::open(&first_record(), &[]);
        let submitted: Vec<(String, String)> = form
            .fields
            .fields()
            .iter()
            .map(|f| {
                let value = if f.column == "Series" { "Car Culture" } else { f.original.as_str() };
                (f.id.clone(), value.to_string())
            })
            .collect();

        let message = browser.save_edit(&form, &submitted).await.unwrap();

        assert_eq!(message, "Model updated");
        let sent = client.sent();
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(
            sent[0].body,
            Some(json!({"serial_number": 1, "updates": {"Series": "Car Culture"}}))
        );
    }

    #[tokio::test]
    async fn test_save_edit_without_changes_sends_nothing() {
        let client = MockClient::new();
        let browser = TableBrowser::new(client.clone());
        let form = EditForm::open(&first_record(), &[]);
        let submitted: Vec<(String, String)> = form
            .fields
            .fields()
            .iter()
            .map(|f| (f.id.clone(), f.original.clone()))
            .collect();

        let result = browser.save_edit(&form, &submitted).await;

        assert_eq!(result, Err(ActionError::Invalid(ValidationError::NoChanges)));
        assert!(client.sent().is_empty());
    }

    #[tokio::test]
    async fn test_delete_requires_literal_confirmation() {
        let client = MockClient::new();
        let browser = TableBrowser::new(client.clone());
        for typed in ["delete", "", "DELETE!", "Delete"] {
            let result = browser.delete(&first_record(), typed).await;
            assert_eq!(result, Err(ActionError::Invalid(ValidationError::ConfirmationMismatch)));
        }
        assert!(client.sent().is_empty());

        client.reply("/api/delete-model", ok(json!({"message": "Deleted model 1"})));
        let message = browser.delete(&first_record(), "DELETE").await.unwrap();
        assert_eq!(message, "Deleted model 1");
        let sent = client.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Delete);
        assert_eq!(sent[0].body, Some(json!({"serial_number": 1})));
    }

    #[tokio::test]
    async fn test_delete_failure_surfaces_server_text() {
        let client = MockClient::new();
        client.reply("/api/delete-model", failed("Model not found"));
        let browser = TableBrowser::new(client.clone());

        let err = browser.delete(&first_record(), "DELETE").await.unwrap_err();
        assert_eq!(err.to_string(), "Model not found");
    }
}
