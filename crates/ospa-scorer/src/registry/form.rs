use tracing::warn;

use crate::scoring::Candidate;

/// Schools divisions of the National Capital Region offered on the nomination form.
pub const NCR_DIVISIONS: [&str; 16] = [
    "Caloocan",
    "Las Piñas",
    "Makati",
    "Malabon",
    "Mandaluyong",
    "Manila",
    "Marikina",
    "Muntinlupa",
    "Navotas",
    "Parañaque",
    "Pasay",
    "Pasig",
    "Quezon City",
    "San Juan",
    "Taguig City and Pateros",
    "Valenzuela",
];

pub fn is_known_division(division: &str) -> bool {
    NCR_DIVISIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(division.trim()))
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("nominee {0} is required")]
    MissingField(&'static str),
}

/// Nominee details must be complete before a candidate is saved.
pub fn validate_nominee(candidate: &Candidate) -> Result<(), ValidationError> {
    let required = [
        ("name", &candidate.name),
        ("school", &candidate.school),
        ("division", &candidate.division),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(ValidationError::MissingField(*field));
    }

    if !is_known_division(&candidate.division) {
        warn!(
            division = %candidate.division,
            candidate = %candidate.id,
            "division outside NCR roster"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_school_is_rejected() {
        let candidate = Candidate::new("Ana Reyes", "   ", "Pasig");
        assert_eq!(
            validate_nominee(&candidate),
            Err(ValidationError::MissingField("school"))
        );
    }

    #[test]
    fn unknown_division_is_accepted() {
        let candidate = Candidate::new("Ana Reyes", "Rizal HS", "Cebu City");
        assert!(validate_nominee(&candidate).is_ok());
        assert!(!is_known_division("Cebu City"));
        assert!(is_known_division("quezon city"));
    }
}
