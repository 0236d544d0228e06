//! Conversion module
//!
//! Unit tables, linear and affine converters, and the category registry.

pub mod converter;
pub mod error;
pub mod registry;
pub mod units;

pub use converter::{convert_linear, convert_temperature, convert_temperature_named};
pub use error::{ConversionError, ConversionResult};
pub use registry::{convert, list_categories, CategoryInfo, Converter};
pub use units::{
    ConversionFactorTable, TemperatureUnit, UnitCategory, AREA_FACTORS, LENGTH_FACTORS,
    SUPPORTED_CURRENCIES, WEIGHT_FACTORS,
};
