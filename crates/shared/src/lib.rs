//! CURP Generator Shared - wire contract with the code-generation service
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde
//! 2. **No business logic** - Pure data types and serialization
//! 3. **WASM compatible** - Must compile for both native and wasm32 targets

pub mod requests;
pub mod responses;

pub use requests::GenerateCurpRequest;
pub use responses::CurpResponse;

/// Endpoint the service listens on in a default local deployment.
pub const DEFAULT_GENERATE_CURP_URL: &str = "http://localhost:8080/generate_curp";
