//! Collection Endpoints
//!
//! Records, columns, series options and model CRUD.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::{Ack, Api, ApiRequest};
use crate::error::ApiResult;
use crate::models::{Dataset, DropdownOptions};

// ========================
// Argument Structs
// ========================

/// Body of `POST /api/add-model`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewModel {
    pub model_name: String,
    pub series: String,
    pub subseries: String,
}

#[derive(Deserialize)]
struct DropdownEnvelope {
    #[serde(default)]
    series: Map<String, Value>,
}

// ========================
// Commands
// ========================

impl Api {
    pub async fn list_records(&self) -> ApiResult<Dataset> {
        self.call(ApiRequest::get("/api/data"), "Failed to load data").await
    }

    pub async fn add_field(&self, field_name: &str) -> ApiResult<Ack> {
        let body = json!({ "field_name": field_name });
        self.call(ApiRequest::post("/api/add-field", body), "Failed to add field").await
    }

    pub async fn add_model(&self, model: &NewModel) -> ApiResult<Ack> {
        let body = json!(model);
        self.call(ApiRequest::post("/api/add-model", body), "Failed to add model").await
    }

    pub async fn dropdown_options(&self) -> ApiResult<DropdownOptions> {
        let envelope: DropdownEnvelope = self
            .call(ApiRequest::get("/api/dropdown-options"), "Failed to load dropdown options")
            .await?;
        Ok(DropdownOptions::from_map(&envelope.series))
    }

    /// Send only the changed columns of one record
    pub async fn update_model(&self, serial: &Value, updates: &Map<String, Value>) -> ApiResult<Ack> {
        let body = json!({ "serial_number": serial, "updates": updates });
        self.call(ApiRequest::put("/api/update-model", body), "Failed to update model").await
    }

    pub async fn delete_model(&self, serial: &Value) -> ApiResult<Ack> {
        let body = json!({ "serial_number": serial });
        self.call(ApiRequest::delete("/api/delete-model", Some(body)), "Failed to delete model").await
    }
}
