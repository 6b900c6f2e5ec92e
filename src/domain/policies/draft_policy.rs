//! Draft Policy
//!
//! Required-field rules a draft must satisfy before it is persisted.
//! Whitespace-only values count as empty.

use crate::domain::entities::CombinationDraft;

/// A draft was rejected before reaching storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} is required")]
pub struct ValidationError {
    pub field: &'static str,
}

impl ValidationError {
    pub fn missing(field: &'static str) -> Self {
        Self { field }
    }
}

/// Policy for which draft fields must be filled in.
#[derive(Debug, Clone, Copy, Default)]
pub struct DraftPolicy;

impl DraftPolicy {
    /// Check required fields in form order; the first missing one is reported.
    pub fn validate(draft: &CombinationDraft) -> Result<(), ValidationError> {
        let required = [
            ("playstyle", draft.playstyle.as_str()),
            ("racket", draft.racket.as_str()),
            ("rubber_front", draft.rubber_front.as_str()),
        ];

        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ValidationError::missing(*field)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_draft_without_back_rubber_or_notes() {
        let draft = CombinationDraft::new("Attacker", "ALC", "Tenergy 05");
        assert!(DraftPolicy::validate(&draft).is_ok());
    }

    #[test]
    fn rejects_blank_racket() {
        let draft = CombinationDraft::new("Attacker", "   ", "Tenergy 05");
        let err = DraftPolicy::validate(&draft).unwrap_err();
        assert_eq!(err.field, "racket");
        assert_eq!(err.to_string(), "racket is required");
    }

    #[test]
    fn rejects_blank_front_rubber() {
        let draft = CombinationDraft::new("Attacker", "ALC", "\t");
        assert_eq!(
            DraftPolicy::validate(&draft).unwrap_err(),
            ValidationError::missing("rubber_front")
        );
    }

    #[test]
    fn rejects_blank_playstyle() {
        let draft = CombinationDraft::new("", "ALC", "Tenergy 05");
        assert_eq!(DraftPolicy::validate(&draft).unwrap_err().field, "playstyle");
    }
}
