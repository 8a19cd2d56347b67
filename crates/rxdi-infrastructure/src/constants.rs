//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Token and provider field names are defined in `rxdi_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "rxdi.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "rxdi";

/// Environment variable prefix for configuration (`RXDI__SECTION__KEY`)
pub const CONFIG_ENV_PREFIX: &str = "RXDI";

/// Separator between prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "RXDI_LOG";

/// Default log file stem when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "rxdi";
