//! Federative entities offered as birth-state suggestions
//!
//! The birth-state input stays free text; this list only feeds the suggestion
//! dropdown and a non-blocking "unrecognized" hint. No state-to-code mapping is
//! done on this side.

/// Entity names as the code-generation service recognizes them.
pub const MEXICAN_STATES: &[&str] = &[
    "AGUASCALIENTES",
    "BAJA CALIFORNIA",
    "BAJA CALIFORNIA SUR",
    "CAMPECHE",
    "CHIAPAS",
    "CHIHUAHUA",
    "COAHUILA",
    "COLIMA",
    "DISTRITO FEDERAL",
    "DURANGO",
    "ESTADO DE MEXICO",
    "GUANAJUATO",
    "GUERRERO",
    "HIDALGO",
    "JALISCO",
    "MICHOACAN",
    "MORELOS",
    "NAYARIT",
    "NUEVO LEON",
    "OAXACA",
    "PUEBLA",
    "QUERETARO",
    "QUINTANA ROO",
    "SAN LUIS POTOSI",
    "SINALOA",
    "SONORA",
    "TABASCO",
    "TAMAULIPAS",
    "TLAXCALA",
    "VERACRUZ",
    "YUCATAN",
    "ZACATECAS",
];

/// Case-insensitive, whitespace-tolerant membership check.
pub fn is_known_state(name: &str) -> bool {
    let normalized = name.trim().to_uppercase();
    MEXICAN_STATES.iter().any(|state| *state == normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_every_entity() {
        assert_eq!(MEXICAN_STATES.len(), 32);
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        assert!(is_known_state("jalisco"));
        assert!(is_known_state("  Nuevo Leon "));
        assert!(!is_known_state("Texas"));
        assert!(!is_known_state(""));
    }
}
