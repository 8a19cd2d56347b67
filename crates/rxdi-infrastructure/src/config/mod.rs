//! Configuration management
//!
//! Figment-based configuration: defaults, then a TOML file, then
//! `RXDI__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, ContainerConfig, LoggingConfig};
