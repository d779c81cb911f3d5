//! Runtime configuration
//!
//! Read once from the environment at startup.

use std::time::Duration;

pub const DEFAULT_SUBMIT_URL: &str = "https://api.web3forms.com/submit";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

/// Placeholder shipped in the page template in place of a real key
pub const ACCESS_KEY_PLACEHOLDER: &str = "YOUR_ACCESS_KEY_HERE";

pub const ENV_ACCESS_KEY: &str = "THERMOFORM_WEB3FORMS_ACCESS_KEY";
pub const ENV_SUBMIT_URL: &str = "THERMOFORM_SUBMIT_URL";
pub const ENV_HTTP_TIMEOUT: &str = "THERMOFORM_HTTP_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub access_key: Option<String>,
    pub submit_url: String,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_key: None,
            submit_url: DEFAULT_SUBMIT_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let access_key = lookup(ENV_ACCESS_KEY).map(|k| k.trim().to_string());

        let submit_url = lookup(ENV_SUBMIT_URL)
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or(defaults.submit_url);

        let http_timeout = match lookup(ENV_HTTP_TIMEOUT) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!("Ignoring invalid {}={:?}", ENV_HTTP_TIMEOUT, raw);
                    defaults.http_timeout
                }
            },
            None => defaults.http_timeout,
        };

        Self {
            access_key,
            submit_url,
            http_timeout,
        }
    }

    /// Whether a usable form-API key is present
    pub fn access_key_configured(&self) -> bool {
        self.access_key.as_deref().is_some_and(is_usable_access_key)
    }
}

pub fn is_usable_access_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && key != ACCESS_KEY_PLACEHOLDER
}
