//! Converter Status Tool
//!
//! Provides runtime status information and the unit reference guide.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::CurrencyConfig;
use crate::models::Session;

/// Unit reference guide
pub const UNIT_INFO: &str = r#"
# Unit Reference Guide

| Category | Units | Base unit |
|----------|-------|-----------|
| **Length** | meters, kilometers, centimeters, millimeters, miles, yards, feet, inches | meters |
| **Temperature** | celsius, fahrenheit, kelvin | (affine, via celsius) |
| **Weight** | kilograms, grams, milligrams, pounds, ounces, tons | kilograms |
| **Currency** | USD, EUR, GBP, JPY, AUD, CAD, INR | (live exchange rates) |
| **Area** | square meters, square kilometers, square miles, acres, hectares | square meters |

## Notes

- **Length**: standard metric and imperial measurements. 1 mile = 1609.34 m.
- **Temperature**: Celsius, Fahrenheit and Kelvin scales. Values below absolute
  zero are converted arithmetically and not rejected.
- **Weight**: metric and imperial mass units. "tons" are metric tons (1000 kg).
- **Currency**: real-time rates from the exchange-rate service. Requires an API
  key; a failed lookup is reported as an error and never as a zero amount.
- **Area**: land measurement units. 1 hectare = 10000 square meters.

Unit and category names are case-insensitive. Values must be non-negative.
Each successful conversion is added to the session history.
"#;

/// Runtime status of the converter service
#[derive(Debug, Clone, Serialize)]
pub struct ConverterStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Currency service configuration (never includes the key)
    pub currency_api_configured: bool,
    pub currency_api_base_url: String,
    pub currency_timeout_seconds: u64,

    /// Session information
    pub history_len: usize,
    pub dark_mode: bool,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    currency: CurrencyConfig,
}

impl StatusTracker {
    pub fn new(currency: CurrencyConfig) -> Self {
        Self {
            start_time: Instant::now(),
            currency,
        }
    }

    /// Get the current status
    pub fn get_status(&self, session: &Session) -> ConverterStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        ConverterStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            currency_api_configured: self.currency.has_api_key(),
            currency_api_base_url: self.currency.base_url.clone(),
            currency_timeout_seconds: self.currency.timeout.as_secs(),
            history_len: session.history_len(),
            dark_mode: session.dark_mode(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
