//! Unit Converter Library
//!
//! Length, temperature, weight, area and currency conversion with per-session
//! history.

pub mod build_info;
pub mod config;
pub mod conversion;
pub mod currency;
pub mod mcp;
pub mod models;
pub mod tools;
