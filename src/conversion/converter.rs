//! Unit conversion functions
//!
//! Linear scaling for factor-table categories and the affine formulas for
//! temperature.

use super::error::{ConversionError, ConversionResult};
use super::units::{ConversionFactorTable, TemperatureUnit, UnitCategory};

/// Offset between the Celsius and Kelvin zero points
pub const KELVIN_OFFSET: f64 = 273.15;
/// Fahrenheit reading at 0 degrees Celsius
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Convert a value between two units of the same factor table
///
/// The value is normalized to the table's base unit by multiplying with the
/// source factor, then divided by the target factor. Unit names must match the
/// table exactly; no sign constraint is placed on `value`.
pub fn convert_linear(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    table: &ConversionFactorTable,
) -> ConversionResult<f64> {
    let from_factor = table
        .factor(from_unit)
        .ok_or_else(|| ConversionError::unknown_unit(from_unit, table.category))?;
    let to_factor = table
        .factor(to_unit)
        .ok_or_else(|| ConversionError::unknown_unit(to_unit, table.category))?;

    if from_unit == to_unit {
        return Ok(value);
    }

    Ok(value * from_factor / to_factor)
}

/// Convert a temperature between scales
///
/// Goes through Celsius. Readings below absolute zero are converted
/// arithmetically without complaint.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }

    let celsius = match from {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => value - KELVIN_OFFSET,
    };

    match to {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
        TemperatureUnit::Kelvin => celsius + KELVIN_OFFSET,
    }
}

/// Convert a temperature given by unit names
///
/// Accepts the full names case-insensitively and the single-letter aliases
/// `c`, `f` and `k`. The category registry only passes canonical names.
pub fn convert_temperature_named(value: f64, from_unit: &str, to_unit: &str) -> ConversionResult<f64> {
    let from = TemperatureUnit::from_str(from_unit)
        .ok_or_else(|| ConversionError::unknown_unit(from_unit, UnitCategory::Temperature))?;
    let to = TemperatureUnit::from_str(to_unit)
        .ok_or_else(|| ConversionError::unknown_unit(to_unit, UnitCategory::Temperature))?;
    Ok(convert_temperature(value, from, to))
}
