//! Container configuration types

use rxdi_domain::{ContainerOptions, Provider};
use serde::{Deserialize, Serialize};

/// Container settings that can be set outside of code
///
/// Providers carry types and closures, so they are always supplied
/// programmatically; see [`ContainerConfig::options`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerConfig {
    /// Let the container bind concrete injectable types without an explicit
    /// provider
    #[serde(default)]
    pub auto_bind_injectable: bool,
}

impl ContainerConfig {
    /// Container options carrying these settings and the given providers
    pub fn options<I: IntoIterator<Item = Provider>>(&self, providers: I) -> ContainerOptions {
        ContainerOptions::new()
            .with_providers(providers)
            .with_auto_bind_injectable(self.auto_bind_injectable)
    }
}
