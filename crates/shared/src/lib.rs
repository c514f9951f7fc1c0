//! Shared library for the anime tracker tools.
//!
//! This crate provides common functionality used by the binary crates:
//! - Configuration management
//! - Logging infrastructure

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{CatalogConfig, Config, LoggingConfig};
pub use logging::LogConfig;
