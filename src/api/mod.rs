//! Backend API Bindings
//!
//! `HttpClient` is the seam between controllers and the network: the
//! browser build uses `FetchClient`, tests plug in a recording mock.
//! `Api` layers the typed endpoints on top, organized by domain.

mod fetch;
mod preorders;
mod records;

use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

pub use fetch::FetchClient;
pub use records::NewModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// One JSON request against the backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Post, path: path.into(), body: Some(body) }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Put, path: path.into(), body: Some(body) }
    }

    pub fn delete(path: impl Into<String>, body: Option<Value>) -> Self {
        Self { method: Method::Delete, path: path.into(), body }
    }
}

/// Transport abstraction: send a request, get the raw body back
#[async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, request: ApiRequest) -> ApiResult<String>;
}

/// Message-only answer of the mutating endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

impl Ack {
    pub fn message_or(&self, fallback: &str) -> String {
        self.message.clone().unwrap_or_else(|| fallback.to_string())
    }
}

/// Typed endpoints over any `HttpClient`
#[derive(Clone)]
pub struct Api {
    client: Rc<dyn HttpClient>,
}

impl Api {
    pub fn new(client: Rc<dyn HttpClient>) -> Self {
        Self { client }
    }

    async fn call<T: DeserializeOwned>(&self, request: ApiRequest, fallback: &str) -> ApiResult<T> {
        let path = request.path.clone();
        log::debug!("[Api] {:?} {}", request.method, path);
        let body = self.client.send(request).await?;
        let result = parse_envelope(&body, fallback);
        if let Err(e) = &result {
            log::warn!("[Api] {} failed: {}", path, e);
        }
        result
    }
}

/// Check `success` and decode the rest of the body.
///
/// `success:false` becomes `ApiError::Api` with the server's `error` or
/// `message` text, else `fallback`.
pub fn parse_envelope<T: DeserializeOwned>(body: &str, fallback: &str) -> ApiResult<T> {
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    let success = value.get("success").and_then(Value::as_bool).unwrap_or(false);
    if !success {
        let text = ["error", "message"]
            .iter()
            .filter_map(|key| value.get(*key).and_then(Value::as_str))
            .find(|s| !s.trim().is_empty())
            .unwrap_or(fallback);
        return Err(ApiError::Api(text.to_string()));
    }
    serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_success_false_uses_error_text() {
        let body = json!({"success": false, "error": "Excel file locked"}).to_string();
        let result: ApiResult<Ack> = parse_envelope(&body, "Failed");
        assert_eq!(result.unwrap_err(), ApiError::Api("Excel file locked".into()));
    }

    #[test]
    fn test_envelope_falls_back_to_message_then_default() {
        let body = json!({"success": false, "message": "Error: boom"}).to_string();
        let result: ApiResult<Ack> = parse_envelope(&body, "Failed");
        assert_eq!(result.unwrap_err(), ApiError::Api("Error: boom".into()));

        let body = json!({"success": false}).to_string();
        let result: ApiResult<Ack> = parse_envelope(&body, "Failed to load data");
        assert_eq!(result.unwrap_err(), ApiError::Api("Failed to load data".into()));
    }

    #[test]
    fn test_envelope_parse_error() {
        let result: ApiResult<Ack> = parse_envelope("<html>502</html>", "Failed");
        assert!(matches!(result, Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_envelope_missing_success_is_failure() {
        let result: ApiResult<Ack> = parse_envelope(r#"{"message":"ok"}"#, "Failed");
        assert_eq!(result.unwrap_err(), ApiError::Api("ok".into()));
    }
}
