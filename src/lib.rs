//! Thermoform Library
//!
//! Temperature conversion and contact-form validation, plus the MCP tools
//! that expose them.

pub mod build_info;
pub mod config;
pub mod contact;
pub mod mcp;
pub mod temperature;
pub mod tools;
pub mod validation;
