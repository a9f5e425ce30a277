//! Browser `fetch` transport

use async_trait::async_trait;
use gloo_net::http::Request;

use super::{ApiRequest, HttpClient, Method};
use crate::config;
use crate::error::{ApiError, ApiResult};

/// `HttpClient` backed by gloo-net
pub struct FetchClient {
    base: String,
}

impl FetchClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into().trim_end_matches('/').to_string() }
    }
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new(config::api_base())
    }
}

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, request: ApiRequest) -> ApiResult<String> {
        let url = format!("{}{}", self.base, request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        // Error statuses still carry a JSON envelope, so the body is returned as-is
        let response = match &request.body {
            Some(body) => builder.json(body).map_err(transport)?.send().await,
            None => builder.send().await,
        }
        .map_err(transport)?;

        if !response.ok() {
            log::debug!("[FetchClient] {} answered HTTP {}", request.path, response.status());
        }
        response.text().await.map_err(transport)
    }
}
