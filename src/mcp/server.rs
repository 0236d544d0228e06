//! Unit Converter MCP Server Implementation
//!
//! Exposes the conversion tools over MCP. Each service instance owns one
//! session, so history and dark mode are never shared between clients.

use std::sync::{Arc, Mutex, MutexGuard};

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::config::CurrencyConfig;
use crate::currency::{ExchangeRateClient, RateProvider};
use crate::models::Session;
use crate::tools::convert::{self, ConvertRequest};
use crate::tools::session as session_tools;
use crate::tools::status::StatusTracker;

/// Unit Converter MCP Service
#[derive(Clone)]
pub struct ConverterService {
    status_tracker: Arc<StatusTracker>,
    session: Arc<Mutex<Session>>,
    rates: Arc<dyn RateProvider>,
    tool_router: ToolRouter<ConverterService>,
}

impl ConverterService {
    /// Create a service backed by the exchange-rate HTTP client
    pub fn new(config: CurrencyConfig) -> Self {
        let rates = Arc::new(ExchangeRateClient::new(config.clone()));
        Self::with_rate_provider(config, rates)
    }

    pub fn with_rate_provider(config: CurrencyConfig, rates: Arc<dyn RateProvider>) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new(config)),
            session: Arc::new(Mutex::new(Session::new())),
            rates,
            tool_router: Self::tool_router(),
        }
    }

    fn lock_session(&self) -> Result<MutexGuard<'_, Session>, McpError> {
        self.session
            .lock()
            .map_err(|_| McpError::internal_error("Session state is unavailable", None))
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// User-facing failure; the session remains usable
fn conversion_error(message: String) -> CallToolResult {
    tracing::warn!("Conversion rejected: {}", message);
    CallToolResult::error(vec![Content::text(format!("Conversion Error: {}", message))])
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertParams {
    /// Category: Length, Temperature, Weight, Currency or Area
    pub category: String,
    /// Unit to convert from (e.g. "kilometers", "celsius", "USD")
    pub from_unit: String,
    /// Unit to convert to
    pub to_unit: String,
    /// Non-negative value to convert
    pub value: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConversionHistoryParams {
    /// Maximum entries to return, newest first (default all)
    pub limit: Option<usize>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl ConverterService {
    // --- Status ---

    #[tool(description = "Get the current status of the converter including build info, currency API configuration, session state, and process information")]
    fn converter_status(&self) -> Result<CallToolResult, McpError> {
        let session = self.lock_session()?;
        json_result(&self.status_tracker.get_status(&session))
    }

    #[tool(description = "Get the unit reference guide describing every category and unit")]
    fn unit_info(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::UNIT_INFO;
        Ok(CallToolResult::success(vec![Content::text(UNIT_INFO)]))
    }

    // --- Conversion ---

    #[tool(description = "List conversion categories with their selectable units")]
    fn list_categories(&self) -> Result<CallToolResult, McpError> {
        json_result(&convert::list_categories())
    }

    #[tool(description = "Convert a value between two units of the same category. Currency conversions query a live exchange-rate service. Successful conversions are added to the session history.")]
    async fn convert(&self, Parameters(p): Parameters<ConvertParams>) -> Result<CallToolResult, McpError> {
        let request = ConvertRequest {
            category: p.category,
            from_unit: p.from_unit,
            to_unit: p.to_unit,
            value: p.value,
        };
        let conversion = match convert::resolve_request(&request) {
            Ok(conversion) => conversion,
            Err(message) => return Ok(conversion_error(message)),
        };

        // The currency client blocks; the session stays unlocked meanwhile.
        let rates = self.rates.clone();
        let outcome = tokio::task::spawn_blocking(move || conversion.evaluate(rates.as_ref()))
            .await
            .map_err(|e| McpError::internal_error(format!("Conversion task failed: {}", e), None))?;

        match outcome {
            Ok(result) => {
                let response = {
                    let mut session = self.lock_session()?;
                    convert::record_conversion(&mut session, conversion, result)
                };
                json_result(&response)
            }
            Err(message) => Ok(conversion_error(message)),
        }
    }

    // --- Session ---

    #[tool(description = "Get this session's conversion history, newest first")]
    fn conversion_history(&self, Parameters(p): Parameters<ConversionHistoryParams>) -> Result<CallToolResult, McpError> {
        let session = self.lock_session()?;
        json_result(&session_tools::conversion_history(&session, p.limit))
    }

    #[tool(description = "Toggle dark mode for this session and return the new setting")]
    fn toggle_dark_mode(&self) -> Result<CallToolResult, McpError> {
        let mut session = self.lock_session()?;
        json_result(&session_tools::toggle_dark_mode(&mut session))
    }
}

#[tool_handler]
impl ServerHandler for ConverterService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "unit-converter".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Unit Converter".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Unit Converter - length, temperature, weight, currency and area conversion. \
                 Call list_categories to see valid units, then convert with category, from_unit, to_unit and value. \
                 unit_info explains each category. \
                 Session: conversion_history, toggle_dark_mode. \
                 converter_status reports build and currency API configuration."
                    .into(),
            ),
        }
    }
}
