//! Employee form validation.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::EmployeeDraft;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Employee form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Department,
}

impl Field {
    /// Key used for the field in error maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Department => "department",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-keyed validation messages. Empty when the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for a field, if it failed.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(field, msg)| format!("{field}: {msg}")).collect();
        f.write_str(&parts.join("; "))
    }
}

/// Validate an employee draft before submission.
///
/// Returns an empty map when the draft can be submitted.
pub fn validate(draft: &EmployeeDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if draft.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required");
    }

    if draft.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !EMAIL_PATTERN.is_match(&draft.email) {
        errors.insert(Field::Email, "Invalid email format");
    }

    if draft.department.is_empty() {
        errors.insert(Field::Department, "Department is required");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_draft_has_three_errors() {
        let errors = validate(&EmployeeDraft::new("", "", ""));

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Department), Some("Department is required"));
    }

    #[test]
    fn test_valid_draft() {
        let errors = validate(&EmployeeDraft::new("Ann", "ann@x.com", "HR"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_invalid_email_only() {
        let errors = validate(&EmployeeDraft::new("Ann", "not-an-email", "HR"));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some("Invalid email format"));
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let errors = validate(&EmployeeDraft::new("   ", " \t", "HR"));

        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Department), None);
    }

    #[test]
    fn test_email_shapes() {
        let check = |email: &str| validate(&EmployeeDraft::new("Ann", email, "HR")).is_empty();

        assert!(check("a@b.c"));
        assert!(check("first.last@sub.example.org"));
        assert!(!check("a@b"));
        assert!(!check("a b@c.d"));
        assert!(!check("a@@b.c"));
        assert!(!check("@b.c"));
        assert!(!check("a@b."));
    }

    #[test]
    fn test_display_lists_fields_in_order() {
        let errors = validate(&EmployeeDraft::new("", "x", ""));
        assert_eq!(
            errors.to_string(),
            "name: Name is required; email: Invalid email format; department: Department is required"
        );
    }
}
