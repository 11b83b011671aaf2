//! Outcome of the most recent submission

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

// ============================================================================
// CurpCode
// ============================================================================

/// An identity code returned by the code-generation service.
///
/// The content is opaque; the only guarantee is that it is non-empty and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurpCode(String);

impl CurpCode {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the code is empty after trimming.
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("CURP cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CurpCode {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CurpCode> for String {
    fn from(code: CurpCode) -> String {
        code.0
    }
}

// ============================================================================
// ResultState
// ============================================================================

/// What the result area shows. Always replaced wholesale, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultState {
    /// No code yet
    #[default]
    Empty,
    /// Last applied submission succeeded
    Code(CurpCode),
    /// Last applied submission failed; holds a user-facing message
    Error(String),
}

impl ResultState {
    pub fn code(&self) -> Option<&CurpCode> {
        match self {
            ResultState::Code(code) => Some(code),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ResultState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ResultState::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curp_code_is_trimmed() {
        let code = CurpCode::new("  PELJ900517HJCRPNA1\n").unwrap();
        assert_eq!(code.as_str(), "PELJ900517HJCRPNA1");
    }

    #[test]
    fn empty_curp_code_is_rejected() {
        assert!(CurpCode::new("   ").is_err());
    }

    #[test]
    fn curp_code_deserialize_validates() {
        let ok: CurpCode = serde_json::from_str("\"ABC\"").unwrap();
        assert_eq!(ok.as_str(), "ABC");
        assert!(serde_json::from_str::<CurpCode>("\"\"").is_err());
    }

    #[test]
    fn result_state_accessors_are_exclusive() {
        let code = ResultState::Code(CurpCode::new("X").unwrap());
        assert_eq!(code.code().map(CurpCode::as_str), Some("X"));
        assert_eq!(code.error_message(), None);
        assert!(!code.is_empty());

        let error = ResultState::Error("sin conexión".to_string());
        assert_eq!(error.code(), None);
        assert_eq!(error.error_message(), Some("sin conexión"));

        assert!(ResultState::default().is_empty());
    }
}
