//! Thermoform Status Tool
//!
//! Provides runtime status information about the Thermoform service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Usage instructions for AI assistants
pub const INSTRUCTIONS: &str = r#"
# Thermoform Instructions

## Temperature Conversion

**Tool:** `convert_temperature`
- `value`: the reading exactly as the user typed it (text, e.g. "98.6")
- `from` / `to`: `celsius`, `fahrenheit` or `kelvin` (also `c`, `f`, `k`)

Conversions always go through Celsius. Results are rounded to 2 decimal
places for `display`; `value` keeps full precision. When `from` equals `to`
the reading is returned untouched with the note
"Same unit - no conversion needed".

Readings below absolute zero are rejected:

| Scale | Absolute zero |
|-------|---------------|
| Celsius | -273.15 °C |
| Fahrenheit | -459.67 °F |
| Kelvin | 0 K |

A reading exactly at absolute zero is valid. Use `check_absolute_zero` to
test a number without converting it, and `reference_temperatures` for water
freezing/boiling points and body temperature.

## Contact Form

Fields: `name` (min 2 characters), `email`, `subject` (min 3 characters),
`message` (min 10 characters). All are required.

1. Call `validate_contact_form` first. Every invalid field is reported at
   once; show all messages to the user, not just the first.
2. Only when the form is valid, call `submit_contact_form`.
3. Relay the returned `notification.message` to the user.

If the notification says the access key is not configured, the server
operator must set `THERMOFORM_WEB3FORMS_ACCESS_KEY`; retrying will not help.
"#;

/// Runtime status of the Thermoform service
#[derive(Debug, Clone, Serialize)]
pub struct ThermoformStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Contact form endpoint
    pub submit_url: String,
    pub contact_configured: bool,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: chrono::DateTime<chrono::Utc>,
    submit_url: String,
    contact_configured: bool,
}

impl StatusTracker {
    pub fn new(submit_url: impl Into<String>, contact_configured: bool) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now(),
            submit_url: submit_url.into(),
            contact_configured,
        }
    }

    pub fn get_status(&self) -> ThermoformStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        ThermoformStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            submit_url: self.submit_url.clone(),
            contact_configured: self.contact_configured,
            started_at: self.started_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_process() {
        let tracker = StatusTracker::new("http://localhost/submit", false);
        let status = tracker.get_status();
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.submit_url, "http://localhost/submit");
        assert!(!status.contact_configured);
        assert_eq!(status.version, crate::build_info::VERSION);
    }
}
