//! dill Catalog - IoC Container Configuration
//!
//! Hands the configuration and the binding table to the `dill` catalog.
//!
//! ```text
//! ContainerOptions ──register_providers()──▶ BindingTable
//!                                                 │
//! AppConfig ──────────────────────────▶ CatalogBuilder::add_value(..)
//!                                                 │
//!                                  Catalog::get_one::<BindingTable>()
//! ```

use crate::config::AppConfig;
use crate::di::bindings::BindingTable;
use crate::di::registration::register_providers;
use dill::{Catalog, CatalogBuilder};
use rxdi_domain::ContainerOptions;
use rxdi_domain::error::{Error, Result};
use std::sync::Arc;
use tracing::info;

/// Build the dill Catalog holding `config` and the bindings of `options`
pub fn build_catalog(config: &AppConfig, options: &ContainerOptions) -> Catalog {
    let bindings = register_providers(options);
    let count = bindings.len();

    let catalog = CatalogBuilder::new()
        .add_value(config.clone())
        .add_value(bindings)
        .build();

    info!("Built dill Catalog with {} bindings", count);
    catalog
}

/// Binding table registered in `catalog`
pub fn catalog_bindings(catalog: &Catalog) -> Result<Arc<BindingTable>> {
    catalog
        .get_one::<BindingTable>()
        .map_err(|e| Error::container(format!("Binding table not registered: {e:?}")))
}

/// Configuration registered in `catalog`
pub fn catalog_config(catalog: &Catalog) -> Result<Arc<AppConfig>> {
    catalog
        .get_one::<AppConfig>()
        .map_err(|e| Error::container(format!("Configuration not registered: {e:?}")))
}
