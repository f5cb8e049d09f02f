//! Form validation and name normalization

use serde::{Deserialize, Serialize};

use super::catalog::VIEW_ALL;
use super::wizard_state::WizardState;

/// Shortest name the analysis service accepts
pub const MIN_NAME_LENGTH: usize = 3;

/// A problem with the form that blocks submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "lowercase")]
pub enum ValidationError {
    #[error("Please select a business structure")]
    Entity,
    #[error("Please select a request type")]
    Request,
    #[error("Names must be at least 3 characters long")]
    Length,
    #[error("Please enter a name")]
    Name,
}

impl ValidationError {
    /// Tag used by the views to highlight the offending field
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Request => "request",
            Self::Length => "length",
            Self::Name => "name",
        }
    }
}

impl WizardState {
    /// Re-check the form, replacing the error list. Returns true when submittable.
    ///
    /// The name is judged in its normalized form, the form that gets sent.
    pub fn validate(&mut self) -> bool {
        self.clear_errors();
        if self.entity_type == VIEW_ALL {
            self.push_error(ValidationError::Entity);
        }
        if self.request_type == VIEW_ALL {
            self.push_error(ValidationError::Request);
        }
        let length = normalize_word_case(&self.name).chars().count();
        if length > 0 && length < MIN_NAME_LENGTH {
            self.push_error(ValidationError::Length);
        }
        if length == 0 {
            self.push_error(ValidationError::Name);
        }
        self.errors.is_empty()
    }
}

/// Collapse whitespace and capitalize the first letter of each word
pub fn normalize_word_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state(name: &str, entity_type: &str, request_type: &str) -> WizardState {
        WizardState {
            name: name.to_string(),
            entity_type: entity_type.to_string(),
            request_type: request_type.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form() {
        let mut s = state("Acme Holdings", "CR", "NEW");
        assert!(s.validate());
        assert!(s.errors.is_empty());
    }

    #[test]
    fn test_short_name() {
        let mut s = state("ab", "CR", "NEW");
        assert!(!s.validate());
        assert_eq!(s.errors, vec![ValidationError::Length]);
    }

    #[test]
    fn test_single_character_name() {
        let mut s = state("a", "CR", "NEW");
        s.validate();
        assert_eq!(s.errors, vec![ValidationError::Length]);
    }

    #[test]
    fn test_empty_name() {
        let mut s = state("", "CR", "NEW");
        assert!(!s.validate());
        assert_eq!(s.errors, vec![ValidationError::Name]);
    }

    #[test]
    fn test_blank_name_counts_as_empty() {
        let mut s = state("   ", "CR", "NEW");
        assert!(!s.validate());
        assert_eq!(s.errors, vec![ValidationError::Name]);
    }

    #[test]
    fn test_padding_does_not_count_toward_length() {
        let mut s = state(" a ", "CR", "NEW");
        assert!(!s.validate());
        assert_eq!(s.errors, vec![ValidationError::Length]);
        let mut s = state("a  b", "CR", "NEW");
        assert!(s.validate());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut s = state("Éé", "CR", "NEW");
        s.validate();
        assert_eq!(s.errors, vec![ValidationError::Length]);
        let mut s = state("Été", "CR", "NEW");
        assert!(s.validate());
    }

    #[test]
    fn test_view_all_selections_accumulate_in_order() {
        let mut s = state("", "all", "all");
        s.validate();
        assert_eq!(
            s.errors,
            vec![
                ValidationError::Entity,
                ValidationError::Request,
                ValidationError::Name
            ]
        );
        let tags: Vec<_> = s.errors.iter().map(|e| e.tag()).collect();
        assert_eq!(tags, vec!["entity", "request", "name"]);
    }

    #[test]
    fn test_errors_cleared_between_passes() {
        let mut s = state("ab", "all", "NEW");
        s.validate();
        assert_eq!(s.errors.len(), 2);
        s.set_name("Acme");
        s.set_entity_type("CR");
        assert!(s.validate());
        assert!(s.errors.is_empty());
    }

    #[test]
    fn test_error_serializes_as_tag() {
        let json = serde_json::to_string(&ValidationError::Length).unwrap();
        assert_eq!(json, "\"length\"");
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            ValidationError::Length.to_string(),
            "Names must be at least 3 characters long"
        );
    }

    #[test]
    fn test_normalize_word_case() {
        assert_eq!(normalize_word_case("acme holdings"), "Acme Holdings");
        assert_eq!(normalize_word_case("  ACME   HOLDINGS ltd "), "Acme Holdings Ltd");
        assert_eq!(normalize_word_case("Acme Holdings"), "Acme Holdings");
        assert_eq!(normalize_word_case(""), "");
    }
}
