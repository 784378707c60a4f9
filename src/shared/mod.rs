//! Shared Utilities Module
//!
//! Contains configuration shared across layers.

pub mod config;

pub use config::{Config, ConfigError, ListboxConfig, LoggingConfig};
