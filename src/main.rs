//! Unit Converter
//!
//! An MCP server for unit and currency conversion.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use unit_converter::build_info;
use unit_converter::config::CurrencyConfig;
use unit_converter::mcp::ConverterService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr to not interfere with MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("unit_converter=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = CurrencyConfig::from_env()?;
    if config.has_api_key() {
        tracing::info!("Currency API: {} (timeout {}s)", config.base_url, config.timeout.as_secs());
    } else {
        tracing::warn!("No exchange-rate API key set; currency conversions will fail until one is configured");
    }

    eprintln!("Starting MCP server on stdio...");

    let service = ConverterService::new(config);
    let server = service.serve((stdin(), stdout())).await?;
    server.waiting().await?;

    Ok(())
}
