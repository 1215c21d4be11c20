// src/lib.rs

//! Internal library for tempconv – not published on crates.io

pub mod app_controller;
pub mod common;
pub mod engine;
pub mod ui;

// Re-export a narrow, testable API surface
pub use engine::{
    config::{Backend, ConverterConfig, ConverterConfigBuilder},
    database::{DEFAULT_PROCEDURE, SqliteConversionService, install_procedure},
    local::LocalConversionService,
    service::{Conversion, ConversionCall, ConversionService, Reading, ServiceError},
    unit::TemperatureUnit,
};
