//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the rxdi domain vocabulary.
//!
//! ### Configuration & DI
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration (defaults, TOML, environment) |
//! | [`di`] | Provider registration into the dill catalog |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use error_ext::ErrorContext;
