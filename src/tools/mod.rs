//! Thermoform Tools module
//!
//! MCP tool implementations for temperature conversion and the contact form.

pub mod forms;
pub mod status;
pub mod temperature;
