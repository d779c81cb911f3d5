//! Contact Form MCP Tools
//!
//! Tools for validating contact-form fields and submitting the form.

use serde::Serialize;

use crate::contact::{ContactClient, Notification};
use crate::validation::{
    validate_field as check_field, ContactForm, FieldError, FieldKind, FormField, FormReport,
};

/// Response for validate_field
#[derive(Debug, Serialize)]
pub struct ValidateFieldResponse {
    pub field: String,
    pub kind: &'static str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response for submit_contact_form
#[derive(Debug, Serialize)]
pub struct SubmitContactFormResponse {
    pub success: bool,
    pub notification: Notification,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_message: Option<String>,
}

/// Validate one field
///
/// `kind` overrides the kind inferred from the field name. An unknown kind
/// fails the field like any other rule.
pub fn validate_field(
    field_name: &str,
    value: &str,
    required: bool,
    kind: Option<&str>,
) -> ValidateFieldResponse {
    let mut field = FormField::new(field_name, value, required);
    if let Some(kind) = kind {
        match FieldKind::from_str(kind) {
            Some(parsed) => field = field.with_kind(parsed),
            None => {
                return ValidateFieldResponse {
                    field: field.name,
                    kind: field.kind.as_str(),
                    ok: false,
                    message: Some(format!("Unknown field kind: {}", kind)),
                }
            }
        }
    }

    let result = check_field(&field);
    ValidateFieldResponse {
        field: field.name,
        kind: field.kind.as_str(),
        ok: result.ok,
        message: result.message,
    }
}

/// Validate every field of the contact form
pub fn validate_contact_form(form: &ContactForm) -> FormReport {
    form.validate()
}

/// Validate and send the contact form
pub async fn submit_contact_form(
    client: &ContactClient,
    form: &ContactForm,
) -> SubmitContactFormResponse {
    match client.submit(form).await {
        Ok(outcome) => SubmitContactFormResponse {
            success: true,
            notification: outcome.notification,
            errors: Vec::new(),
            api_message: outcome.api_message,
        },
        Err(e) => {
            tracing::warn!("Form submission error: {}", e);
            let errors = e.report().map(|r| r.errors.clone()).unwrap_or_default();
            SubmitContactFormResponse {
                success: false,
                notification: e.notification(),
                errors,
                api_message: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::contact::NotificationKind;

    #[test]
    fn test_validate_field_infers_kind() {
        let response = validate_field("email", "a@b.co", true, None);
        assert!(response.ok);
        assert_eq!(response.kind, "email");
    }

    #[test]
    fn test_validate_field_explicit_kind() {
        let response = validate_field("reply_to", "nope", true, Some("email"));
        assert!(!response.ok);
        assert_eq!(response.message.as_deref(), Some("Please enter a valid email address"));
    }

    #[test]
    fn test_validate_field_unknown_kind() {
        let response = validate_field("x", "y", true, Some("phone"));
        assert!(!response.ok);
        assert_eq!(response.kind, "text");
        assert_eq!(response.message.as_deref(), Some("Unknown field kind: phone"));
    }

    #[tokio::test]
    async fn test_submit_reports_field_errors() {
        let client = ContactClient::new(&Config::default()).unwrap();
        let form = ContactForm {
            name: String::new(),
            email: "x@y.com".to_string(),
            subject: "Hi".to_string(),
            message: "0123456789".to_string(),
        };
        let response = submit_contact_form(&client, &form).await;
        assert!(!response.success);
        assert_eq!(response.notification.kind, NotificationKind::Error);
        assert_eq!(response.errors.len(), 2);
    }

    #[tokio::test]
    async fn test_submit_without_key() {
        let client = ContactClient::new(&Config::default()).unwrap();
        let form = ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Lovely projects here.".to_string(),
        };
        let response = submit_contact_form(&client, &form).await;
        assert!(!response.success);
        assert!(response.errors.is_empty());
        assert_eq!(
            response.notification.message,
            "Please configure your Web3Forms access key."
        );
    }
}
