//! Client-side validation errors.

use thiserror::Error;

/// A required-field problem caught before any request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please select a team member.")]
    NoTeamMember,
}

/// Check that a text field holds something other than whitespace.
pub(crate) fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}
