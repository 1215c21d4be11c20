use std::io::Write;
use std::path::Path;

use anyhow::Result;
#[cfg(feature = "colors")]
use colored::Colorize;

use crate::common::format::format_temperature;
use crate::engine::config::ConverterConfig;
use crate::engine::service::{Conversion, ServiceError};

pub const INVALID_UNIT_MESSAGE: &str = "Invalid unit. Use C for Celsius or F for Fahrenheit.";
pub const INVALID_TEMPERATURE_MESSAGE: &str = "Invalid temperature. Enter a numeric value.";

pub fn report_conversion(out: &mut impl Write, conversion: &Conversion) -> Result<()> {
    writeln!(
        out,
        "Converted Temperature: {} {}",
        format_temperature(conversion.value),
        conversion.unit
    )?;
    Ok(())
}

pub fn report_invalid_unit(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{INVALID_UNIT_MESSAGE}")?;
    Ok(())
}

pub fn report_invalid_temperature(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{INVALID_TEMPERATURE_MESSAGE}")?;
    Ok(())
}

pub fn report_service_error(out: &mut impl Write, err: &ServiceError) -> Result<()> {
    writeln!(out, "Database error: {err}")?;
    Ok(())
}

pub fn print_installed(name: &str, path: &Path) {
    #[cfg(feature = "colors")]
    println!(
        "{}{}{} {}",
        "[".bold().white(),
        "✓".bold().green(),
        "]".bold().white(),
        format!("Installed procedure {name} into {}", path.display()).green()
    );

    #[cfg(not(feature = "colors"))]
    println!("[✓] Installed procedure {name} into {}", path.display());
}

pub fn print_config(config: &ConverterConfig) -> Result<()> {
    let text = toml::to_string_pretty(config)?;
    #[cfg(feature = "colors")]
    println!("{}", "# Resolved configuration".yellow());
    #[cfg(not(feature = "colors"))]
    println!("# Resolved configuration");
    print!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::unit::TemperatureUnit;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_result_line() {
        let c = Conversion {
            value: 212.0,
            unit: TemperatureUnit::Fahrenheit,
        };
        assert_eq!(
            render(|o| report_conversion(o, &c)),
            "Converted Temperature: 212.0 F\n"
        );
    }

    #[test]
    fn test_error_line() {
        let err = ServiceError::Connect("unable to open database file".into());
        assert_eq!(
            render(|o| report_service_error(o, &err)),
            "Database error: unable to open database file\n"
        );
    }
}
