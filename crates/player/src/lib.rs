//! CURP Generator client.
//!
//! This crate contains the form UI, the application logic behind it, and the
//! HTTP adapters that reach the code-generation service. Multi-platform support
//! (desktop and browser) is provided via compile-time `cfg` selection.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod ui;

// Re-export commonly used entrypoints
pub use application::{ClientConfig, CurpService, FormController};
pub use ui::app;
