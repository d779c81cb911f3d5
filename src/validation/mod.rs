//! Form validation module
//!
//! Field rules for the contact form and whole-form validation.

pub mod field;
pub mod form;

pub use field::{
    is_valid_email, validate, validate_field, validate_value, FieldKind, FormField,
    ValidationResult,
};
pub use form::{validate_form, ContactForm, FieldError, FormReport};
