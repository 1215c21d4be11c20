// src/engine/mod.rs
pub mod config;
pub mod config_file;
pub mod convert;
pub mod database;
pub mod local;
pub mod service;
pub mod unit;
