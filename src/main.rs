//! Thermoform
//!
//! An MCP server for temperature conversion and contact-form validation.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use thermoform::build_info;
use thermoform::config::Config;
use thermoform::contact::ContactClient;
use thermoform::mcp::ThermoformService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays free for MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("thermoform=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let config = Config::from_env();
    eprintln!("Contact endpoint: {}", config.submit_url);
    if !config.access_key_configured() {
        tracing::warn!(
            "No Web3Forms access key configured; submit_contact_form will refuse to send"
        );
    }

    let contact = ContactClient::new(&config)?;
    let service = ThermoformService::new(contact);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
