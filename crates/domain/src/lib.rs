//! CURP Generator Domain - form state, validation, and submission outcomes
//!
//! Pure types only: no I/O, no async, no framework dependencies.

pub mod birth_state;
pub mod error;
pub mod form;
pub mod result;

pub use birth_state::{is_known_state, MEXICAN_STATES};
pub use error::DomainError;
pub use form::{FieldName, FormFields, Gender, IdentityAttributes, BIRTH_DATE_FORMAT};
pub use result::{CurpCode, ResultState};
