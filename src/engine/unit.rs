//! The unit tag that accompanies every temperature reading.

use std::fmt;
use std::str::FromStr;

/// One of the two supported temperature scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// The single-letter code passed to the conversion routine.
    pub fn code(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
        }
    }

    /// The unit a reading in `self` is converted into.
    pub fn opposite(self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a token is not exactly `C` or `F` after uppercasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidUnit(pub String);

impl fmt::Display for InvalidUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid unit '{}'", self.0)
    }
}

impl std::error::Error for InvalidUnit {}

impl FromStr for TemperatureUnit {
    type Err = InvalidUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "C" => Ok(TemperatureUnit::Celsius),
            "F" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(InvalidUnit(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("C".parse(), Ok(TemperatureUnit::Celsius));
        assert_eq!("c".parse(), Ok(TemperatureUnit::Celsius));
        assert_eq!("F".parse(), Ok(TemperatureUnit::Fahrenheit));
        assert_eq!(" f ".parse(), Ok(TemperatureUnit::Fahrenheit));
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for token in ["K", "k", "", "CF", "celsius", "Fahrenheit", "°C"] {
            assert!(
                token.parse::<TemperatureUnit>().is_err(),
                "'{token}' should not parse"
            );
        }
    }

    #[test]
    fn test_opposite_and_code() {
        assert_eq!(TemperatureUnit::Celsius.opposite(), TemperatureUnit::Fahrenheit);
        assert_eq!(TemperatureUnit::Fahrenheit.opposite(), TemperatureUnit::Celsius);
        assert_eq!(TemperatureUnit::Celsius.to_string(), "C");
        assert_eq!(TemperatureUnit::Fahrenheit.code(), "F");
    }
}
