//! Rejection reasons produced while parsing and validating a dependency.

use thiserror::Error;

use crate::fd::FunctionalDependency;

/// Why a submitted dependency was rejected.
///
/// Field-level variants name the field they came from so that errors from
/// both sides of a submission can be shown together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    // === Field-level ===
    #[error("{field}: enter at least one attribute.")]
    EmptyInput { field: String },

    #[error("{field}: attributes must be separated by commas.")]
    MissingSeparator { field: String },

    #[error("{field}: attribute \"{token}\" is listed more than once.")]
    DuplicateAttribute { field: String, token: String },

    #[error("{field}: attribute \"{token}\" contains whitespace.")]
    WhitespaceInToken { field: String, token: String },

    #[error("{field}: attribute \"{token}\" is longer than {max} characters.", max = crate::attr::MAX_TOKEN_LEN)]
    TokenTooLong { field: String, token: String },

    // === Cross-field ===
    /// Some attribute appears on both sides.
    #[error("Trivial functional dependency: {} on both sides.", .shared.join(", "))]
    TrivialDependency { shared: Vec<String> },

    // === Store-level ===
    #[error("This functional dependency already exists.")]
    DuplicateFd,

    /// The candidate overlaps an accepted dependency through its determinant.
    #[error("Determinant overlaps the existing dependency {existing}.")]
    DeterminantOverlapViolation { existing: FunctionalDependency },
}

impl ValidationError {
    /// The field label for field-level errors, `None` otherwise.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::EmptyInput { field }
            | Self::MissingSeparator { field }
            | Self::DuplicateAttribute { field, .. }
            | Self::WhitespaceInToken { field, .. }
            | Self::TokenTooLong { field, .. } => Some(field),
            Self::TrivialDependency { .. }
            | Self::DuplicateFd
            | Self::DeterminantOverlapViolation { .. } => None,
        }
    }
}

/// Join error messages into the single line shown for a rejected submission.
pub fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
