//! Test doubles for the HTTP boundary.

pub mod fixtures;

pub use fixtures::{api_request_failed, complete_fields, ScriptedApiPort, ScriptedReply};
