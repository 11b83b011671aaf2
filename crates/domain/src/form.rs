//! Identity form state
//!
//! `FormFields` is the raw, as-typed state behind the six inputs. It is only ever
//! replaced wholesale (`with_field` returns a new snapshot), so a snapshot handed
//! to an in-flight submission can never observe later keystrokes.
//!
//! `IdentityAttributes` is the validated, frozen form of the same data. It is the
//! only thing the application layer will send to the code-generation service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Wire format for the birth date.
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// FieldName
// ============================================================================

/// The six recognized form keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    FirstName,
    FatherSurname,
    MotherSurname,
    BirthDate,
    Gender,
    BirthState,
}

impl FieldName {
    /// All fields, in display order.
    pub const ALL: [FieldName; 6] = [
        FieldName::FirstName,
        FieldName::FatherSurname,
        FieldName::MotherSurname,
        FieldName::BirthDate,
        FieldName::Gender,
        FieldName::BirthState,
    ];

    /// Wire key, identical to the request body field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FirstName => "first_name",
            FieldName::FatherSurname => "father_surname",
            FieldName::MotherSurname => "mother_surname",
            FieldName::BirthDate => "birth_date",
            FieldName::Gender => "gender",
            FieldName::BirthState => "birth_state",
        }
    }

    /// User-facing label shown next to (or inside) the input.
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::FirstName => "Nombre(s)",
            FieldName::FatherSurname => "Apellido Paterno",
            FieldName::MotherSurname => "Apellido Materno",
            FieldName::BirthDate => "Fecha de Nacimiento",
            FieldName::Gender => "Género",
            FieldName::BirthState => "Entidad de Nacimiento",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown form field: {}", s)))
    }
}

// ============================================================================
// Gender
// ============================================================================

/// Gender code accepted by the code-generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Hombre
    H,
    /// Mujer
    M,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::H, Gender::M];

    /// One-letter code sent on the wire.
    pub fn as_code(&self) -> &'static str {
        match self {
            Gender::H => "H",
            Gender::M => "M",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::H => "Hombre",
            Gender::M => "Mujer",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "H" => Ok(Gender::H),
            "M" => Ok(Gender::M),
            other => Err(DomainError::parse(format!(
                "Gender must be 'H' or 'M', got '{}'",
                other
            ))),
        }
    }
}

// ============================================================================
// FormFields
// ============================================================================

/// Raw form state, exactly as shown in the inputs.
///
/// `Default` is the mount state: every field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub first_name: String,
    pub father_surname: String,
    pub mother_surname: String,
    pub birth_date: String,
    pub gender: String,
    pub birth_state: String,
}

impl FormFields {
    pub fn new(
        first_name: impl Into<String>,
        father_surname: impl Into<String>,
        mother_surname: impl Into<String>,
        birth_date: impl Into<String>,
        gender: impl Into<String>,
        birth_state: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            father_surname: father_surname.into(),
            mother_surname: mother_surname.into(),
            birth_date: birth_date.into(),
            gender: gender.into(),
            birth_state: birth_state.into(),
        }
    }

    /// Current raw value of a field.
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::FatherSurname => &self.father_surname,
            FieldName::MotherSurname => &self.mother_surname,
            FieldName::BirthDate => &self.birth_date,
            FieldName::Gender => &self.gender,
            FieldName::BirthState => &self.birth_state,
        }
    }

    fn slot_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::FatherSurname => &mut self.father_surname,
            FieldName::MotherSurname => &mut self.mother_surname,
            FieldName::BirthDate => &mut self.birth_date,
            FieldName::Gender => &mut self.gender,
            FieldName::BirthState => &mut self.birth_state,
        }
    }

    /// Returns a new snapshot where only `field` differs. `self` is left as is.
    pub fn with_field(&self, field: FieldName, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        *next.slot_mut(field) = value.into();
        next
    }

    /// Fields that are empty after trimming, in display order.
    pub fn missing_fields(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    /// Whether every field has a value. Submission stays disabled otherwise.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Validate and freeze the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - Any field is empty after trimming (the first missing one is reported)
    /// - The birth date is not `YYYY-MM-DD` or is not a real calendar date
    /// - The gender is not `H` or `M`
    pub fn validate(&self) -> Result<IdentityAttributes, DomainError> {
        if let Some(missing) = self.missing_fields().first() {
            return Err(DomainError::validation(format!("{} is required", missing)));
        }

        let birth_date = parse_birth_date(&self.birth_date)?;
        let gender = self
            .gender
            .parse::<Gender>()
            .map_err(|e| DomainError::validation(e.to_string()))?;

        Ok(IdentityAttributes {
            first_name: self.first_name.trim().to_string(),
            father_surname: self.father_surname.trim().to_string(),
            mother_surname: self.mother_surname.trim().to_string(),
            birth_date,
            gender,
            birth_state: self.birth_state.trim().to_string(),
        })
    }
}

/// Strict `YYYY-MM-DD`; chrono alone would also accept unpadded months and days.
fn parse_birth_date(raw: &str) -> Result<NaiveDate, DomainError> {
    let raw = raw.trim();
    let well_formed = raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(DomainError::validation(format!(
            "birth_date must use YYYY-MM-DD, got '{}'",
            raw
        )));
    }

    NaiveDate::parse_from_str(raw, BIRTH_DATE_FORMAT).map_err(|_| {
        DomainError::validation(format!("birth_date '{}' is not a calendar date", raw))
    })
}

// ============================================================================
// IdentityAttributes
// ============================================================================

/// A validated identity snapshot, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityAttributes {
    first_name: String,
    father_surname: String,
    mother_surname: String,
    birth_date: NaiveDate,
    gender: Gender,
    birth_state: String,
}

impl IdentityAttributes {
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn father_surname(&self) -> &str {
        &self.father_surname
    }

    pub fn mother_surname(&self) -> &str {
        &self.mother_surname
    }

    /// Birth date in wire format (`YYYY-MM-DD`).
    pub fn birth_date_iso(&self) -> String {
        self.birth_date.format(BIRTH_DATE_FORMAT).to_string()
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn birth_state(&self) -> &str {
        &self.birth_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> FormFields {
        FormFields::new(
            "Juan",
            "Pérez",
            "López",
            "1990-05-17",
            "H",
            "Jalisco",
        )
    }

    #[test]
    fn default_is_empty_and_incomplete() {
        let fields = FormFields::default();
        assert_eq!(fields.missing_fields(), FieldName::ALL.to_vec());
        assert!(!fields.is_complete());
    }

    #[test]
    fn with_field_changes_only_the_target() {
        let before = complete();
        for field in FieldName::ALL {
            let after = before.with_field(field, "X");
            assert_eq!(after.get(field), "X");
            for other in FieldName::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(after.get(other), before.get(other));
            }
        }
    }

    #[test]
    fn with_field_leaves_previous_snapshot_intact() {
        let before = FormFields::default();
        let after = before.with_field(FieldName::FirstName, "Ana");
        assert_eq!(before.first_name, "");
        assert_eq!(after.first_name, "Ana");
    }

    #[test]
    fn field_name_round_trips_through_wire_key() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>(), Ok(field));
        }
        assert!("curp".parse::<FieldName>().is_err());
        assert!("FirstName".parse::<FieldName>().is_err());
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let fields = complete().with_field(FieldName::BirthState, "   ");
        assert_eq!(fields.missing_fields(), vec![FieldName::BirthState]);

        let err = fields.validate().unwrap_err();
        assert_eq!(err, DomainError::validation("birth_state is required"));
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let fields = FormFields::default().with_field(FieldName::FirstName, "Ana");
        let err = fields.validate().unwrap_err();
        assert_eq!(err, DomainError::validation("father_surname is required"));
    }

    #[test]
    fn validate_trims_and_parses() {
        let attrs = complete()
            .with_field(FieldName::FirstName, "  Juan ")
            .validate()
            .unwrap();

        assert_eq!(attrs.first_name(), "Juan");
        assert_eq!(attrs.gender(), Gender::H);
        assert_eq!(attrs.birth_date_iso(), "1990-05-17");
        assert_eq!(attrs.birth_state(), "Jalisco");
    }

    #[test]
    fn validate_normalizes_only_outer_whitespace_and_gender_case() {
        let attrs = complete()
            .with_field(FieldName::MotherSurname, " de la Cruz ")
            .with_field(FieldName::Gender, "m")
            .with_field(FieldName::BirthState, "ciudad de méxico ")
            .validate()
            .unwrap();

        assert_eq!(attrs.mother_surname(), "de la Cruz");
        assert_eq!(attrs.gender(), Gender::M);
        assert_eq!(attrs.birth_state(), "ciudad de méxico");
    }

    #[test]
    fn validate_rejects_malformed_dates() {
        for bad in [
            "1990-5-17",
            "17/05/1990",
            "1990-02-30",
            "19900517",
            "abcd-ef-gh",
            "12345-01-01",
        ] {
            let result = complete().with_field(FieldName::BirthDate, bad).validate();
            assert!(result.is_err(), "expected '{}' to be rejected", bad);
        }
    }

    #[test]
    fn validate_rejects_unknown_gender() {
        let err = complete()
            .with_field(FieldName::Gender, "X")
            .validate()
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn gender_parses_codes() {
        assert_eq!("H".parse::<Gender>(), Ok(Gender::H));
        assert_eq!(" m ".parse::<Gender>(), Ok(Gender::M));
        assert!("".parse::<Gender>().is_err());
        assert!("Hombre".parse::<Gender>().is_err());
    }

    #[test]
    fn gender_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Gender::M).unwrap(), "\"M\"");
    }
}
