//! Main application configuration

use super::container::ContainerConfig;
use super::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Container defaults
    #[serde(default)]
    pub container: ContainerConfig,
}
