use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::{
    engine::{
        database::install_procedure,
        service::{Conversion, ConversionService, Reading, ServiceError, call_once},
        unit::TemperatureUnit,
    },
    ui::{
        cli::Cli,
        config::{EnvOverrides, build_config, load_config_file},
        output,
        prompt::{InputSource, TEMPERATURE_PROMPT, UNIT_PROMPT, stdin_source},
    },
};

/// How a single conversion run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Converted(Conversion),
    InvalidTemperature(String),
    InvalidUnit(String),
    ServiceFailed(ServiceError),
}

impl Outcome {
    /// Only a failed service call is an unsuccessful run; bad input is a normal ending.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::ServiceFailed(_) => ExitCode::FAILURE,
            _ => ExitCode::SUCCESS,
        }
    }
}

/// The primary orchestration function for the application.
pub fn run(args: Cli) -> Result<ExitCode> {
    let cfg_file = load_config_file(&args)?;
    let env = EnvOverrides::from_vars(std::env::vars());
    let config = build_config(&args, &env, &cfg_file)?;

    if args.show_config {
        output::print_config(&config)?;
        return Ok(ExitCode::SUCCESS);
    }

    if args.install_procedure {
        install_procedure(&config.database, &config.procedure)?;
        output::print_installed(&config.procedure, &config.database);
        return Ok(ExitCode::SUCCESS);
    }

    let service = config.service();
    let mut input = stdin_source();
    let mut stdout = std::io::stdout().lock();
    let outcome = convert_interactively(input.as_mut(), &mut stdout, service.as_ref())?;
    stdout.flush().context("Failed to flush standard output")?;

    Ok(outcome.exit_code())
}

/// Asks for a temperature and a unit, converts through `service`, and reports
/// the result on `out`. The service is contacted only when both answers are valid.
pub fn convert_interactively<W: Write>(
    input: &mut dyn InputSource,
    out: &mut W,
    service: &dyn ConversionService,
) -> Result<Outcome> {
    let raw_value = input.ask(TEMPERATURE_PROMPT, out)?;
    let value = match parse_temperature(&raw_value) {
        Some(v) => v,
        None => {
            log::debug!("Rejected temperature input '{raw_value}'");
            output::report_invalid_temperature(out)?;
            return Ok(Outcome::InvalidTemperature(raw_value));
        }
    };

    let raw_unit = input.ask(UNIT_PROMPT, out)?;
    let unit = match raw_unit.parse::<TemperatureUnit>() {
        Ok(u) => u,
        Err(e) => {
            log::debug!("Rejected unit input: {e}");
            output::report_invalid_unit(out)?;
            return Ok(Outcome::InvalidUnit(raw_unit));
        }
    };

    let reading = Reading { value, unit };
    match call_once(service, &reading) {
        Ok(conversion) => {
            output::report_conversion(out, &conversion)?;
            Ok(Outcome::Converted(conversion))
        }
        Err(err) => {
            log::warn!("Conversion via {} failed: {err:?}", service.describe());
            output::report_service_error(out, &err)?;
            Ok(Outcome::ServiceFailed(err))
        }
    }
}

/// Parses a finite real number; `NaN` and infinities are rejected.
fn parse_temperature(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
