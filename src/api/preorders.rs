//! Preorder Endpoints

use serde::Deserialize;
use serde_json::json;

use super::{Ack, Api, ApiRequest};
use crate::error::ApiResult;
use crate::models::{Preorder, PreorderPayload, Statistics};

#[derive(Deserialize)]
struct PreorderList {
    #[serde(default)]
    data: Vec<Preorder>,
}

#[derive(Deserialize)]
struct StatisticsEnvelope {
    #[serde(default)]
    statistics: Statistics,
}

fn preorder_path(serial: i64) -> String {
    format!("/api/preorders/{}", serial)
}

impl Api {
    pub async fn list_preorders(&self) -> ApiResult<Vec<Preorder>> {
        let list: PreorderList = self
            .call(ApiRequest::get("/api/preorders"), "Failed to load preorders")
            .await?;
        Ok(list.data)
    }

    pub async fn preorder_statistics(&self) -> ApiResult<Statistics> {
        let envelope: StatisticsEnvelope = self
            .call(ApiRequest::get("/api/preorders/statistics"), "Failed to load statistics")
            .await?;
        Ok(envelope.statistics)
    }

    pub async fn create_preorder(&self, payload: &PreorderPayload) -> ApiResult<Ack> {
        let body = json!(payload);
        self.call(ApiRequest::post("/api/preorders", body), "Failed to save preorder").await
    }

    pub async fn update_preorder(&self, serial: i64, payload: &PreorderPayload) -> ApiResult<Ack> {
        let body = json!(payload);
        self.call(ApiRequest::put(preorder_path(serial), body), "Failed to save preorder").await
    }

    pub async fn delete_preorder(&self, serial: i64) -> ApiResult<Ack> {
        self.call(ApiRequest::delete(preorder_path(serial), None), "Failed to delete preorder").await
    }
}
