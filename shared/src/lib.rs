//! Shared configuration types for the LightBnB data access layer
//!
//! This crate holds the settings that every other crate reads:
//! - Database connection and pool configuration
//! - Environment detection and logging configuration
//! - Location of the property fixture file

pub mod config;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, Environment, FixtureConfig, LogFormat, LoggingConfig,
};
