//! Thermoform MCP Server Implementation
//!
//! Implements the MCP server with all Thermoform tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::contact::ContactClient;
use crate::tools::forms;
use crate::tools::status::StatusTracker;
use crate::tools::temperature;
use crate::validation::ContactForm;

/// Thermoform MCP Service
#[derive(Clone)]
pub struct ThermoformService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    contact: ContactClient,
    tool_router: ToolRouter<ThermoformService>,
}

impl ThermoformService {
    pub fn new(contact: ContactClient) -> Self {
        let tracker = StatusTracker::new(contact.submit_url(), contact.is_configured());
        Self {
            status_tracker: Arc::new(Mutex::new(tracker)),
            contact,
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Temperature Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertTemperatureParams {
    /// Reading as entered, e.g. "98.6"
    pub value: String,
    /// Source scale: celsius, fahrenheit or kelvin
    pub from: String,
    /// Target scale: celsius, fahrenheit or kelvin
    pub to: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CheckAbsoluteZeroParams {
    pub value: f64,
    /// Scale: celsius, fahrenheit or kelvin
    pub unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ReferenceTemperaturesParams {
    /// Scale to format the readings in (optional)
    pub unit: Option<String>,
    /// Single point to return: water_freeze, water_boil or body_temp (optional)
    pub key: Option<String>,
}

// ============================================================================
// Contact Form Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ValidateFieldParams {
    /// Field name: name, email, subject, message, or any other
    pub field_name: String,
    pub value: String,
    /// Whether an empty value fails (default true)
    #[serde(default = "default_required")]
    pub required: bool,
    /// Explicit kind: text, email, name, subject or message (optional)
    pub kind: Option<String>,
}

fn default_required() -> bool {
    true
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ContactFormParams {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl From<ContactFormParams> for ContactForm {
    fn from(p: ContactFormParams) -> Self {
        Self {
            name: p.name,
            email: p.email,
            subject: p.subject,
            message: p.message,
        }
    }
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl ThermoformService {
    // --- Status ---

    #[tool(description = "Get the current status of the Thermoform service including build info, contact form configuration, and process information")]
    async fn thermoform_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for converting temperatures and handling the contact form. Call this when unsure how to use the Thermoform tools.")]
    fn thermoform_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(INSTRUCTIONS)]))
    }

    // --- Temperature ---

    #[tool(description = "Convert a temperature between celsius, fahrenheit and kelvin. Rejects empty input, non-numbers and readings below absolute zero.")]
    fn convert_temperature(&self, Parameters(p): Parameters<ConvertTemperatureParams>) -> Result<CallToolResult, McpError> {
        let result = temperature::convert_temperature(&p.value, &p.from, &p.to);
        to_json(&result)
    }

    #[tool(description = "Check whether a temperature is at or above absolute zero on the given scale")]
    fn check_absolute_zero(&self, Parameters(p): Parameters<CheckAbsoluteZeroParams>) -> Result<CallToolResult, McpError> {
        let result = temperature::check_absolute_zero(p.value, &p.unit);
        to_json(&result)
    }

    #[tool(description = "List reference temperatures (water freezing point, water boiling point, body temperature) on every scale")]
    fn reference_temperatures(&self, Parameters(p): Parameters<ReferenceTemperaturesParams>) -> Result<CallToolResult, McpError> {
        let result = temperature::reference_temperatures(p.unit.as_deref(), p.key.as_deref());
        to_json(&result)
    }

    // --- Contact Form ---

    #[tool(description = "Validate a single contact form field and return the error message if it fails")]
    fn validate_field(&self, Parameters(p): Parameters<ValidateFieldParams>) -> Result<CallToolResult, McpError> {
        let result = forms::validate_field(&p.field_name, &p.value, p.required, p.kind.as_deref());
        to_json(&result)
    }

    #[tool(description = "Validate every contact form field at once and report all errors")]
    fn validate_contact_form(&self, Parameters(p): Parameters<ContactFormParams>) -> Result<CallToolResult, McpError> {
        let form: ContactForm = p.into();
        to_json(&forms::validate_contact_form(&form))
    }

    #[tool(description = "Validate and send the contact form through the Web3Forms API. Nothing is sent if any field is invalid.")]
    async fn submit_contact_form(&self, Parameters(p): Parameters<ContactFormParams>) -> Result<CallToolResult, McpError> {
        let form: ContactForm = p.into();
        let result = forms::submit_contact_form(&self.contact, &form).await;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for ThermoformService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "thermoform".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Thermoform".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Thermoform - temperature conversion and contact form validation. \
                 Call thermoform_instructions first. \
                 Temperature: convert_temperature, check_absolute_zero, reference_temperatures. \
                 Contact form: validate_field, validate_contact_form, submit_contact_form. \
                 Status: thermoform_status."
                    .into(),
            ),
        }
    }
}
