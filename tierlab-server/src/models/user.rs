//! User entity and validated creation input

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use sqlx::FromRow;

use super::ValidationError;

/// Basic `local@domain.tld` shape: no whitespace or extra `@` in any part
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));

/// User row as persisted in the store
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for user creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Validate creation input.
    ///
    /// # Rules
    /// - Both fields present and non-empty
    /// - Email matches `local@domain.tld` (no whitespace, single `@`)
    ///
    /// Runs before any store access; uniqueness is the store's job.
    pub fn parse(name: Option<String>, email: Option<String>) -> Result<Self, ValidationError> {
        let name = name.filter(|n| !n.is_empty());
        let email = email.filter(|e| !e.is_empty());

        let (name, email) = match (name, email) {
            (Some(name), Some(email)) => (name, email),
            _ => return Err(ValidationError::MissingFields),
        };

        if !EMAIL_RE.is_match(&email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self { name, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn valid_input() {
        let user = NewUser::parse(some("Ada Lovelace"), some("ada@example.com")).unwrap();
        assert_eq!(user.name(), "Ada Lovelace");
        assert_eq!(user.email(), "ada@example.com");
    }

    #[test]
    fn rejects_missing_name() {
        let err = NewUser::parse(None, some("ada@example.com")).unwrap_err();
        assert_eq!(err, ValidationError::MissingFields);
    }

    #[test]
    fn rejects_missing_email() {
        let err = NewUser::parse(some("Ada"), None).unwrap_err();
        assert_eq!(err, ValidationError::MissingFields);
    }

    #[test]
    fn rejects_empty_fields() {
        // Empty strings are treated as missing, not as a format error
        let err = NewUser::parse(some(""), some("ada@example.com")).unwrap_err();
        assert_eq!(err, ValidationError::MissingFields);

        let err = NewUser::parse(some("Ada"), some("")).unwrap_err();
        assert_eq!(err, ValidationError::MissingFields);
    }

    #[test]
    fn rejects_bad_email() {
        for email in ["not-an-email", "a@b", "a b@c.d", "a@b@c.d", "@example.com"] {
            let err = NewUser::parse(some("Ada"), some(email)).unwrap_err();
            assert_eq!(err, ValidationError::InvalidEmail, "email: {email}");
        }
    }

    #[test]
    fn accepts_subdomains() {
        assert!(NewUser::parse(some("Ada"), some("ada@mail.example.co.uk")).is_ok());
    }
}
