//! Raw API Port - Object-safe HTTP boundary
//!
//! Typed request/response conversion happens in the application layer; adapters
//! only move JSON values, which keeps the trait object-safe so the composition
//! root can hand out `Arc<dyn RawApiPort>`.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    /// POST `body` as JSON to the absolute `url` and return the decoded JSON body.
    ///
    /// Non-2xx statuses are reported as `ApiError::HttpError`.
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError>;
}
