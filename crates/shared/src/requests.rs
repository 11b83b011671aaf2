//! Request bodies sent to the code-generation service

use serde::{Deserialize, Serialize};

// =============================================================================
// Generate CURP
// =============================================================================

/// Body of `POST /generate_curp`.
///
/// Field names are fixed by the service; every field is a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateCurpRequest {
    pub first_name: String,
    pub father_surname: String,
    pub mother_surname: String,
    /// `YYYY-MM-DD`
    pub birth_date: String,
    /// `"H"` or `"M"`
    pub gender: String,
    pub birth_state: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_service_field_names() {
        let request = GenerateCurpRequest {
            first_name: "Juan".to_string(),
            father_surname: "Pérez".to_string(),
            mother_surname: "López".to_string(),
            birth_date: "1990-05-17".to_string(),
            gender: "H".to_string(),
            birth_state: "Jalisco".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "first_name": "Juan",
                "father_surname": "Pérez",
                "mother_surname": "López",
                "birth_date": "1990-05-17",
                "gender": "H",
                "birth_state": "Jalisco",
            })
        );
    }
}
