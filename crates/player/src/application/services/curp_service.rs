//! CURP Service - Application service for the code-generation call
//!
//! Converts a validated identity snapshot into the wire request, performs the
//! single POST through `RawApiPort`, and turns the response into a `CurpCode`.
//! The whole call is bounded by the configured request timeout.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use curpgen_domain::{CurpCode, IdentityAttributes};
use curpgen_shared::{CurpResponse, GenerateCurpRequest};

use crate::application::config::ClientConfig;
use crate::application::error::ServiceError;
use crate::ports::outbound::{ApiError, RawApiPort};

/// Build the wire request for a validated snapshot.
pub fn to_generate_request(attrs: &IdentityAttributes) -> GenerateCurpRequest {
    GenerateCurpRequest {
        first_name: attrs.first_name().to_string(),
        father_surname: attrs.father_surname().to_string(),
        mother_surname: attrs.mother_surname().to_string(),
        birth_date: attrs.birth_date_iso(),
        gender: attrs.gender().as_code().to_string(),
        birth_state: attrs.birth_state().to_string(),
    }
}

/// Service for generating identity codes
#[derive(Clone)]
pub struct CurpService {
    api: Arc<dyn RawApiPort>,
    config: ClientConfig,
}

impl CurpService {
    pub fn new(api: Arc<dyn RawApiPort>, config: ClientConfig) -> Self {
        Self { api, config }
    }

    /// Ask the service for the code of `attrs`.
    pub async fn generate(&self, attrs: &IdentityAttributes) -> Result<CurpCode, ServiceError> {
        let request = to_generate_request(attrs);
        let body =
            serde_json::to_value(&request).map_err(|e| ApiError::SerializeError(e.to_string()))?;

        tracing::debug!(endpoint = self.config.endpoint(), "Requesting CURP");

        let value = with_timeout(
            self.config.request_timeout(),
            self.api.post_json(self.config.endpoint(), &body),
        )
        .await?;

        if value.get("curp").is_none() {
            return Err(ServiceError::MissingCode);
        }
        let response: CurpResponse =
            serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))?;

        CurpCode::new(response.curp).map_err(|_| ServiceError::MissingCode)
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn with_timeout<T>(
    timeout: Duration,
    call: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    tokio::time::timeout(timeout, call)
        .await
        .map_err(|_| ApiError::Timeout)?
}

#[cfg(target_arch = "wasm32")]
async fn with_timeout<T>(
    timeout: Duration,
    call: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    use futures_util::future::{select, Either};
    use gloo_timers::future::TimeoutFuture;

    let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
    match select(Box::pin(call), Box::pin(TimeoutFuture::new(millis))).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ApiError::Timeout),
    }
}
