//! The boundary between the command and whatever performs the conversion.

use std::fmt;

use crate::engine::unit::TemperatureUnit;

/// The parameters of one conversion call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub value: f64,
    pub unit: TemperatureUnit,
}

/// A converted value, labeled with the unit it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub value: f64,
    pub unit: TemperatureUnit,
}

impl Conversion {
    pub fn from_reading(reading: &Reading, value: f64) -> Self {
        Self {
            value,
            unit: reading.unit.opposite(),
        }
    }
}

/// Every way the conversion service or its connection can fail.
///
/// `Display` yields only the underlying diagnostic; callers add their own prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The connection could not be established.
    Connect(String),
    /// The connection works but the named routine does not exist.
    ProcedureNotFound(String),
    /// The routine was found but failed while running.
    Execution(String),
    /// The routine ran but produced no value.
    NoResult(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Connect(msg) => write!(f, "{msg}"),
            ServiceError::ProcedureNotFound(name) => {
                write!(f, "procedure '{name}' does not exist")
            }
            ServiceError::Execution(msg) => write!(f, "{msg}"),
            ServiceError::NoResult(name) => write!(f, "procedure '{name}' returned no value"),
        }
    }
}

impl std::error::Error for ServiceError {}

/// A source of conversion calls.
pub trait ConversionService {
    /// Acquires a connection. Dropping the returned call releases it.
    fn open(&self) -> Result<Box<dyn ConversionCall + '_>, ServiceError>;

    /// A short human-readable description of the target, used in logs.
    fn describe(&self) -> String;
}

/// An open connection able to run the conversion routine.
pub trait ConversionCall {
    fn execute(&mut self, reading: &Reading) -> Result<f64, ServiceError>;
}

/// Opens a connection, runs one call, and releases the connection before returning.
pub fn call_once(
    service: &dyn ConversionService,
    reading: &Reading,
) -> Result<Conversion, ServiceError> {
    log::debug!("Opening conversion service: {}", service.describe());
    let mut call = service.open()?;
    let value = call.execute(reading)?;
    Ok(Conversion::from_reading(reading, value))
}
