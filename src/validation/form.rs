//! Whole-form validation
//!
//! Every field is checked so that all errors can be shown at once.

use serde::{Deserialize, Serialize};

use super::field::{validate_field, FormField};

/// A single failing field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Result of validating a whole form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormReport {
    pub valid: bool,
    pub errors: Vec<FieldError>,
}

impl FormReport {
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// Validate every field; no short-circuit on the first failure
pub fn validate_form(fields: &[FormField]) -> FormReport {
    let errors: Vec<FieldError> = fields
        .iter()
        .filter_map(|field| {
            let result = validate_field(field);
            if result.ok {
                None
            } else {
                Some(FieldError {
                    field: field.name.clone(),
                    message: result.message.unwrap_or_default(),
                })
            }
        })
        .collect();

    FormReport {
        valid: errors.is_empty(),
        errors,
    }
}

/// The portfolio contact form; every field is required
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::new("name", self.name.as_str(), true),
            FormField::new("email", self.email.as_str(), true),
            FormField::new("subject", self.subject.as_str(), true),
            FormField::new("message", self.message.as_str(), true),
        ]
    }

    pub fn validate(&self) -> FormReport {
        validate_form(&self.fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::field::{MSG_REQUIRED, MSG_SUBJECT_TOO_SHORT};

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_reports_every_failure() {
        let report = form("", "x@y.com", "Hi", "0123456789").validate();
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.error_for("name"), Some(MSG_REQUIRED));
        assert_eq!(report.error_for("subject"), Some(MSG_SUBJECT_TOO_SHORT));
        assert_eq!(report.error_for("email"), None);
    }

    #[test]
    fn test_errors_keep_field_order() {
        let report = form("A", "bad", "Hi", "short").validate();
        let names: Vec<&str> = report.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(names, vec!["name", "email", "subject", "message"]);
    }

    #[test]
    fn test_valid_form() {
        let report = form("Ada", "ada@example.com", "Hello", "Nice portfolio!").validate();
        assert!(report.valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_empty_field_list_is_valid() {
        assert!(validate_form(&[]).valid);
    }

    #[test]
    fn test_optional_fields_in_form() {
        let fields = vec![
            FormField::new("name", "Ada", true),
            FormField::new("phone", "", false),
        ];
        assert!(validate_form(&fields).valid);
    }
}
