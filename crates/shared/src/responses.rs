//! Response bodies returned by the code-generation service

use serde::{Deserialize, Serialize};

/// Successful response of `POST /generate_curp`.
///
/// Extra fields are ignored so the service can grow its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurpResponse {
    pub curp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_unknown_fields() {
        let response: CurpResponse =
            serde_json::from_str(r#"{"curp":"PELJ900517HJCRPNA1","version":2}"#).unwrap();
        assert_eq!(response.curp, "PELJ900517HJCRPNA1");
    }

    #[test]
    fn missing_curp_is_an_error() {
        assert!(serde_json::from_str::<CurpResponse>(r#"{"code":"X"}"#).is_err());
    }
}
