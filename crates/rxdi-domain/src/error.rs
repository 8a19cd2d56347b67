//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for rxdi
#[derive(Error, Debug)]
pub enum Error {
    /// A value was used as a token but is not a tagged token, a symbol or a
    /// concrete constructor. The offending value is reported through the
    /// `error!` diagnostic emitted right before this error is returned.
    #[error(
        "The given token is invalid. Fail to provide this token. See the error diagnostic above."
    )]
    InvalidToken,

    /// A provider descriptor did not match any provider shape
    #[error("Invalid provider: {message}")]
    InvalidProvider {
        /// Description of the rejected provider
        message: String,
    },

    /// A factory function failed to produce its value
    #[error("Factory error: {message}")]
    Factory {
        /// Description of the factory failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The underlying IoC container rejected an operation
    #[error("Container error: {message}")]
    Container {
        /// Description of the container error
        message: String,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Provider error creation methods
impl Error {
    /// Create an invalid provider error
    pub fn invalid_provider<S: Into<String>>(message: S) -> Self {
        Self::InvalidProvider {
            message: message.into(),
        }
    }

    /// Create a factory error
    pub fn factory<S: Into<String>>(message: S) -> Self {
        Self::Factory {
            message: message.into(),
            source: None,
        }
    }

    /// Create a factory error with source
    pub fn factory_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Factory {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a container error
    pub fn container<S: Into<String>>(message: S) -> Self {
        Self::Container {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
