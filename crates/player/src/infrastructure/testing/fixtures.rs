//! Test fixtures used across unit tests.

use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use curpgen_domain::FormFields;

use crate::ports::outbound::{ApiError, RawApiPort};

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

/// A form with every field filled in with valid values.
pub fn complete_fields(first_name: &str) -> FormFields {
    FormFields::new(
        first_name,
        "Pérez",
        "López",
        "1990-05-17",
        "H",
        "Jalisco",
    )
}

/// One canned answer: wait `delay`, then return `result`.
#[derive(Debug, Clone)]
pub struct ScriptedReply {
    pub delay: Duration,
    pub result: Result<Value, ApiError>,
}

impl ScriptedReply {
    pub fn curp(code: &str, delay: Duration) -> Self {
        Self {
            delay,
            result: Ok(json!({ "curp": code })),
        }
    }

    pub fn error(error: ApiError, delay: Duration) -> Self {
        Self {
            delay,
            result: Err(error),
        }
    }
}

/// `RawApiPort` stub that answers calls in order from a script and records every
/// request body it receives.
///
/// Unlike a mockall mock, replies can be delayed, which is what the overlapping
/// submission tests need.
#[derive(Debug, Default)]
pub struct ScriptedApiPort {
    script: Mutex<VecDeque<ScriptedReply>>,
    requests: Mutex<Vec<(String, Value)>>,
}

impl ScriptedApiPort {
    pub fn new(replies: impl IntoIterator<Item = ScriptedReply>) -> Self {
        Self {
            script: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests seen so far as `(url, body)`, in call order.
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl RawApiPort for ScriptedApiPort {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((url.to_string(), body.clone()));
        }

        let reply = self
            .script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .ok_or_else(|| api_request_failed("no scripted reply left"))?;

        tokio::time::sleep(reply.delay).await;
        reply.result
    }
}
