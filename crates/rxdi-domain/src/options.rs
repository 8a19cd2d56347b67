//! Container options

use crate::provider::Provider;

/// Options handed to the container at construction
#[derive(Clone, Debug, Default)]
pub struct ContainerOptions {
    /// Providers to register, in order
    pub providers: Vec<Provider>,

    /// Let the container bind concrete injectable types it meets without an
    /// explicit provider
    pub auto_bind_injectable: bool,
}

impl ContainerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider
    #[must_use]
    pub fn with_provider<P: Into<Provider>>(mut self, provider: P) -> Self {
        self.providers.push(provider.into());
        self
    }

    /// Append several providers
    #[must_use]
    pub fn with_providers<I: IntoIterator<Item = Provider>>(mut self, providers: I) -> Self {
        self.providers.extend(providers);
        self
    }

    #[must_use]
    pub fn with_auto_bind_injectable(mut self, enabled: bool) -> Self {
        self.auto_bind_injectable = enabled;
        self
    }
}
