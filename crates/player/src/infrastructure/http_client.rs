//! HTTP adapter for `RawApiPort`
//!
//! Desktop builds use `reqwest`; browser builds go through `gloo-net` (the
//! browser's fetch). Both report failures with the same `ApiError` variants.

use serde_json::Value;
use std::time::Duration;

use crate::ports::outbound::{ApiError, RawApiPort};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::ApiAdapter;

#[cfg(target_arch = "wasm32")]
pub use wasm::ApiAdapter;

#[cfg(not(target_arch = "wasm32"))]
mod desktop {
    use super::*;
    use reqwest::Client;

    /// reqwest-backed adapter. The client carries the request timeout.
    #[derive(Clone)]
    pub struct ApiAdapter {
        client: Client,
    }

    impl ApiAdapter {
        pub fn new(request_timeout: Duration) -> Self {
            let client = Client::builder()
                .timeout(request_timeout)
                .build()
                .unwrap_or_else(|_| Client::new());

            Self { client }
        }
    }

    #[async_trait::async_trait]
    impl RawApiPort for ApiAdapter {
        async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
            tracing::debug!(url, "POST");

            let response = self
                .client
                .post(url)
                .json(body)
                .send()
                .await
                .map_err(|e| {
                    if e.is_timeout() {
                        ApiError::Timeout
                    } else {
                        ApiError::RequestFailed(e.to_string())
                    }
                })?;

            let status = response.status();
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                tracing::warn!(url, status = status.as_u16(), "Service returned failure status");
                return Err(ApiError::HttpError {
                    status: status.as_u16(),
                    message,
                });
            }

            response
                .json::<Value>()
                .await
                .map_err(|e| ApiError::ParseError(e.to_string()))
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::*;
    use gloo_net::http::Request;

    /// fetch-backed adapter. Timeouts are enforced by the calling service.
    #[derive(Clone, Default)]
    pub struct ApiAdapter;

    impl ApiAdapter {
        pub fn new(_request_timeout: Duration) -> Self {
            Self
        }
    }

    #[async_trait::async_trait(?Send)]
    impl RawApiPort for ApiAdapter {
        async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
            tracing::debug!(url, "POST");

            let request = Request::post(url)
                .json(body)
                .map_err(|e| ApiError::SerializeError(e.to_string()))?;

            let response = request
                .send()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

            if !response.ok() {
                let status = response.status();
                let message = response.text().await.unwrap_or_default();
                tracing::warn!(url, status, "Service returned failure status");
                return Err(ApiError::HttpError { status, message });
            }

            response
                .json::<Value>()
                .await
                .map_err(|e| ApiError::ParseError(e.to_string()))
        }
    }
}
