//! Application services
//!
//! Services depend on port traits, not concrete infrastructure implementations.

pub mod curp_service;

pub use curp_service::{to_generate_request, CurpService};
