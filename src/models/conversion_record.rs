//! Conversion record model
//!
//! One successful conversion, as kept in a session's history.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::conversion::UnitCategory;

/// A completed conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub timestamp: DateTime<Local>,
    pub category: UnitCategory,
    pub value: f64,
    pub from_unit: String,
    pub result: f64,
    pub to_unit: String,
}

/// Data for recording a conversion
#[derive(Debug, Clone)]
pub struct ConversionRecordCreate {
    pub category: UnitCategory,
    pub value: f64,
    pub from_unit: String,
    pub result: f64,
    pub to_unit: String,
}

impl ConversionRecord {
    pub fn new(data: ConversionRecordCreate) -> Self {
        Self::at(Local::now(), data)
    }

    pub fn at(timestamp: DateTime<Local>, data: ConversionRecordCreate) -> Self {
        Self {
            timestamp,
            category: data.category,
            value: data.value,
            from_unit: data.from_unit,
            result: data.result,
            to_unit: data.to_unit,
        }
    }

    /// Result line shown right after converting, e.g. "1.0000 kilometers = 1000.0000 meters"
    pub fn summary(&self) -> String {
        format!(
            "{:.4} {} = {:.4} {}",
            self.value, self.from_unit, self.result, self.to_unit
        )
    }
}

/// History line, e.g. "14:03:59: 1 kilometers → 1000.0000 meters"
impl std::fmt::Display for ConversionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} {} → {:.4} {}",
            self.timestamp.format("%H:%M:%S"),
            self.value,
            self.from_unit,
            self.result,
            self.to_unit
        )
    }
}
