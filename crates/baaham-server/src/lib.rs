//! Baaham Server — configuration, logging and composition shared by the
//! `baaham-server` and `usercli` binaries.

pub mod app;
pub mod config;
pub mod telemetry;

pub use config::{AppConfig, ConfigError};
