//! Single-field validation
//!
//! Applies the contact-form rules to one field value and returns a
//! structured result instead of an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MSG_REQUIRED: &str = "This field is required";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MSG_NAME_TOO_SHORT: &str = "Name must be at least 2 characters long";
pub const MSG_SUBJECT_TOO_SHORT: &str = "Subject must be at least 3 characters long";
pub const MSG_MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters long";

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_SUBJECT_LEN: usize = 3;
pub const MIN_MESSAGE_LEN: usize = 10;

/// Loose `local@domain.tld` shape, not RFC 5322
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Kind of form field, which selects the rule applied to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Name,
    Subject,
    Message,
}

impl FieldKind {
    /// Infer the kind from a form field name
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "email" => FieldKind::Email,
            "name" => FieldKind::Name,
            "subject" | "subject_field" => FieldKind::Subject,
            "message" => FieldKind::Message,
            _ => FieldKind::Text,
        }
    }

    /// Parse an explicit kind name
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "required-text" | "required_text" => Some(FieldKind::Text),
            "email" => Some(FieldKind::Email),
            "name" => Some(FieldKind::Name),
            "subject" => Some(FieldKind::Subject),
            "message" => Some(FieldKind::Message),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Name => "name",
            FieldKind::Subject => "subject",
            FieldKind::Message => "message",
        }
    }

    /// Minimum trimmed length for kinds that have one
    pub fn min_len(&self) -> Option<(usize, &'static str)> {
        match self {
            FieldKind::Name => Some((MIN_NAME_LEN, MSG_NAME_TOO_SHORT)),
            FieldKind::Subject => Some((MIN_SUBJECT_LEN, MSG_SUBJECT_TOO_SHORT)),
            FieldKind::Message => Some((MIN_MESSAGE_LEN, MSG_MESSAGE_TOO_SHORT)),
            FieldKind::Text | FieldKind::Email => None,
        }
    }
}

/// A form field as submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormField {
    /// Create a field whose kind is inferred from its name
    pub fn new(name: impl Into<String>, value: impl Into<String>, required: bool) -> Self {
        let name = name.into();
        let kind = FieldKind::from_name(&name);
        Self {
            name,
            value: value.into(),
            kind,
            required,
        }
    }

    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Outcome of validating one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn pass() -> Self {
        Self {
            ok: true,
            message: None,
        }
    }

    pub fn fail(message: &str) -> Self {
        Self {
            ok: false,
            message: Some(message.to_string()),
        }
    }
}

/// Validate a field by name, inferring its kind
pub fn validate(field_name: &str, value: &str, is_required: bool) -> ValidationResult {
    validate_value(FieldKind::from_name(field_name), value, is_required)
}

pub fn validate_field(field: &FormField) -> ValidationResult {
    validate_value(field.kind, &field.value, field.required)
}

/// Apply the rules for `kind` to `value`; the first failing rule wins
pub fn validate_value(kind: FieldKind, value: &str, is_required: bool) -> ValidationResult {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return if is_required {
            ValidationResult::fail(MSG_REQUIRED)
        } else {
            ValidationResult::pass()
        };
    }

    if kind == FieldKind::Email {
        if !is_valid_email(trimmed) {
            return ValidationResult::fail(MSG_INVALID_EMAIL);
        }
        return ValidationResult::pass();
    }

    if let Some((min, message)) = kind.min_len() {
        // UTF-16 code units, as browsers measure input length
        if trimmed.encode_utf16().count() < min {
            return ValidationResult::fail(message);
        }
    }

    ValidationResult::pass()
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_name() {
        assert_eq!(FieldKind::from_name("email"), FieldKind::Email);
        assert_eq!(FieldKind::from_name("subject_field"), FieldKind::Subject);
        assert_eq!(FieldKind::from_name("Subject"), FieldKind::Subject);
        assert_eq!(FieldKind::from_name("phone"), FieldKind::Text);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(FieldKind::from_str("Email"), Some(FieldKind::Email));
        assert_eq!(FieldKind::from_str("required-text"), Some(FieldKind::Text));
        assert_eq!(FieldKind::from_str("phone"), None);
        assert_eq!(FieldKind::Subject.as_str(), "subject");
    }

    #[test]
    fn test_required_empty() {
        let result = validate("phone", "   ", true);
        assert!(!result.ok);
        assert_eq!(result.message.as_deref(), Some(MSG_REQUIRED));
    }

    #[test]
    fn test_optional_empty_passes() {
        assert!(validate("email", "", false).ok);
        assert!(validate("message", "  ", false).ok);
    }

    #[test]
    fn test_email() {
        assert!(!validate("email", "not-an-email", true).ok);
        assert!(validate("email", "a@b.co", true).ok);
        assert!(validate("email", "  a@b.co  ", true).ok);
        assert!(!validate("email", "a@b", true).ok);
        assert!(!validate("email", "a b@c.d", true).ok);
        assert!(!validate("email", "a@@b.c", true).ok);
        assert_eq!(
            validate("email", "x@y", true).message.as_deref(),
            Some(MSG_INVALID_EMAIL)
        );
    }

    #[test]
    fn test_email_stays_permissive() {
        assert!(is_valid_email("a@b.c.d"));
        assert!(is_valid_email("weird!#$%@host.x"));
    }

    #[test]
    fn test_name_length() {
        assert!(validate("name", "Al", true).ok);
        let result = validate("name", "A", true);
        assert!(!result.ok);
        assert_eq!(result.message.as_deref(), Some(MSG_NAME_TOO_SHORT));
        assert!(!validate("name", " A ", true).ok);
    }

    #[test]
    fn test_subject_length() {
        assert!(!validate("subject", "Hi", true).ok);
        assert!(validate("subject", "Hey", true).ok);
    }

    #[test]
    fn test_message_length() {
        assert!(!validate("message", "short", true).ok);
        assert!(validate("message", "0123456789", true).ok);
        assert_eq!(
            validate("message", "012345678", true).message.as_deref(),
            Some(MSG_MESSAGE_TOO_SHORT)
        );
    }

    #[test]
    fn test_length_counts_utf16_units() {
        assert!(validate("name", "Zö", true).ok);
        assert!(!validate("name", "é", true).ok);
        // Astral-plane characters take two code units
        assert!(validate("name", "😀", true).ok);
        assert!(!validate("subject", "😀", true).ok);
    }

    #[test]
    fn test_plain_text_has_no_rule() {
        assert!(validate("company", "x", true).ok);
    }

    #[test]
    fn test_explicit_kind_overrides_name() {
        let field = FormField::new("contact", "nope", true).with_kind(FieldKind::Email);
        assert!(!validate_field(&field).ok);
        let field = FormField::new("contact", "ok@example.org", true).with_kind(FieldKind::Email);
        assert!(validate_field(&field).ok);
    }
}
