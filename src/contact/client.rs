//! Web3Forms HTTP client

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::notification::{Notification, MSG_SEND_FAILED, MSG_SENT};
use crate::config::{is_usable_access_key, Config};
use crate::validation::{ContactForm, FormReport};

/// Contact submission error types
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Please correct the invalid fields")]
    Validation(FormReport),

    #[error("Please configure your Web3Forms access key.")]
    AccessKeyNotConfigured,

    #[error("Form submission failed: {0}")]
    Rejected(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ContactError {
    /// Notification to show the visitor for this failure
    pub fn notification(&self) -> Notification {
        match self {
            ContactError::Validation(_) | ContactError::AccessKeyNotConfigured => {
                Notification::error(self.to_string())
            }
            ContactError::Rejected(_) | ContactError::Http(_) => Notification::error(MSG_SEND_FAILED),
        }
    }

    /// Field errors when the failure came from validation
    pub fn report(&self) -> Option<&FormReport> {
        match self {
            ContactError::Validation(report) => Some(report),
            _ => None,
        }
    }
}

pub type ContactResult<T> = Result<T, ContactError>;

/// JSON body posted to the form API
#[derive(Debug, Serialize)]
struct SubmissionPayload<'a> {
    access_key: &'a str,
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

/// Reply from the form API
#[derive(Debug, Clone, Deserialize)]
pub struct Web3FormsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl Web3FormsResponse {
    pub fn into_outcome(self) -> ContactResult<SubmitOutcome> {
        if self.success {
            Ok(SubmitOutcome {
                notification: Notification::success(MSG_SENT),
                api_message: self.message,
            })
        } else {
            let message = self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "Form submission failed".to_string());
            Err(ContactError::Rejected(message))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitOutcome {
    pub notification: Notification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_message: Option<String>,
}

/// Posts validated contact forms to the form API
#[derive(Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    submit_url: String,
    access_key: Option<String>,
}

impl ContactClient {
    pub fn new(config: &Config) -> ContactResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            http,
            submit_url: config.submit_url.clone(),
            access_key: config.access_key.clone(),
        })
    }

    pub fn submit_url(&self) -> &str {
        &self.submit_url
    }

    pub fn is_configured(&self) -> bool {
        self.access_key.as_deref().is_some_and(is_usable_access_key)
    }

    /// Validate and submit a contact form
    ///
    /// Nothing is sent unless every field passes and an access key is set.
    pub async fn submit(&self, form: &ContactForm) -> ContactResult<SubmitOutcome> {
        let report = form.validate();
        if !report.valid {
            return Err(ContactError::Validation(report));
        }

        let access_key = match self.access_key.as_deref() {
            Some(key) if is_usable_access_key(key) => key,
            _ => return Err(ContactError::AccessKeyNotConfigured),
        };

        let payload = SubmissionPayload {
            access_key,
            name: form.name.trim(),
            email: form.email.trim(),
            subject: form.subject.trim(),
            message: form.message.trim(),
        };

        let response: Web3FormsResponse = self
            .http
            .post(self.submit_url.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await?
            .json()
            .await?;

        match response.into_outcome() {
            Ok(outcome) => {
                tracing::info!("Contact form submitted");
                Ok(outcome)
            }
            Err(e) => {
                tracing::warn!("Contact form rejected: {}", e);
                Err(e)
            }
        }
    }
}
