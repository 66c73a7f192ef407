//! Validation error types
//!
//! Validation happens before any store access; the messages here are part
//! of the API contract.

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `name` or `email` absent or empty on create
    MissingFields,

    /// Email doesn't match the `local@domain.tld` shape
    InvalidEmail,

    /// Path id is not a number
    InvalidUserId,

    /// Request body is not parseable JSON (or not declared as JSON)
    InvalidBody,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => write!(f, "Name and email are required"),
            Self::InvalidEmail => write!(f, "Invalid email format"),
            Self::InvalidUserId => write!(f, "Invalid user ID"),
            Self::InvalidBody => write!(f, "Invalid JSON body"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Name and email are required"
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Invalid email format"
        );
        assert_eq!(ValidationError::InvalidUserId.to_string(), "Invalid user ID");
        assert_eq!(
            ValidationError::InvalidBody.to_string(),
            "Invalid JSON body"
        );
    }
}
