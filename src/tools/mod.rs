//! Converter Tools module
//!
//! Tool implementations behind the MCP server.

pub mod convert;
pub mod session;
pub mod status;
