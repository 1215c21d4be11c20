//! Celsius/Fahrenheit arithmetic.
//!
//! The database backend never calls into this module at conversion time; the
//! same formulas live in the stored body installed by
//! [`crate::engine::database::install_procedure`].

use crate::engine::unit::TemperatureUnit;

pub fn celsius_to_fahrenheit(value: f64) -> f64 {
    value * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(value: f64) -> f64 {
    (value - 32.0) * 5.0 / 9.0
}

/// Converts `value`, expressed in `unit`, into `unit.opposite()`.
pub fn convert(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => celsius_to_fahrenheit(value),
        TemperatureUnit::Fahrenheit => fahrenheit_to_celsius(value),
    }
}

/// SQL expression equivalent of [`convert`], over `:temperature` and `:unit`.
pub const CONVERSION_SQL: &str = "CASE :unit \
     WHEN 'C' THEN :temperature * 9.0 / 5.0 + 32.0 \
     WHEN 'F' THEN (:temperature - 32.0) * 5.0 / 9.0 \
     END";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_points() {
        assert_eq!(convert(100.0, TemperatureUnit::Celsius), 212.0);
        assert_eq!(convert(32.0, TemperatureUnit::Fahrenheit), 0.0);
        assert_eq!(convert(-40.0, TemperatureUnit::Celsius), -40.0);
        assert_eq!(convert(-40.0, TemperatureUnit::Fahrenheit), -40.0);
        assert_eq!(convert(10.0, TemperatureUnit::Celsius), 50.0);
    }
}
