//! Application layer: configuration, services, and the form controller.

pub mod config;
pub mod error;
pub mod form_controller;
pub mod services;

pub use config::{ClientConfig, ConfigError};
pub use error::ServiceError;
pub use form_controller::{FormController, FormSnapshot, PendingSubmission, SubmitOutcome};
pub use services::CurpService;
