//! Provider registration
//!
//! Reduces container options to a [`BindingTable`]. Caller-supplied options
//! are only borrowed, never modified.

use crate::config::ContainerConfig;
use crate::di::bindings::{Binding, BindingTable};
use crate::logging::log_binding_registered;
use rxdi_domain::error::Result;
use rxdi_domain::{ContainerOptions, Value};
use tracing::info;

/// Build the binding table for `options`
///
/// Providers are registered in order. A provider whose token is already bound
/// replaces the earlier binding.
pub fn register_providers(options: &ContainerOptions) -> BindingTable {
    let mut table = BindingTable::new(options.auto_bind_injectable);

    for provider in &options.providers {
        let binding = Binding::from_provider(provider);
        let key = binding.key().clone();
        let kind = binding.kind();
        let replaced = table.insert(binding).is_some();
        log_binding_registered(&key, kind, replaced);
    }

    info!(
        bindings = table.len(),
        auto_bind_injectable = table.auto_bind_injectable(),
        "Registered providers"
    );
    table
}

/// Classify untyped provider descriptors and register them
pub fn register_values(values: &[Value], config: &ContainerConfig) -> Result<BindingTable> {
    let options = ContainerOptions::from_values(values, config.auto_bind_injectable)?;
    Ok(register_providers(&options))
}
