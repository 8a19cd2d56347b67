//! Container bootstrap
//!
//! Composition root: load configuration, merge its container defaults into
//! the caller's providers, and build the catalog.
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let port = Symbol::new("port");
//! let context = init_container(config, [Provider::value(port.clone(), 8080_u16)])?;
//! let binding = context.bindings().get(&TokenKey::Symbol(port));
//! ```

use crate::config::AppConfig;
use crate::di::bindings::BindingTable;
use crate::di::catalog::{build_catalog, catalog_bindings};
use dill::Catalog;
use rxdi_domain::Provider;
use rxdi_domain::error::Result;
use std::sync::Arc;

/// Configuration, bindings, and the catalog holding them
pub struct ContainerContext {
    config: Arc<AppConfig>,
    bindings: Arc<BindingTable>,
    catalog: Catalog,
}

impl ContainerContext {
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    /// Underlying dill catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Build a container context for `providers` using `config` defaults
pub fn init_container<I>(config: AppConfig, providers: I) -> Result<ContainerContext>
where
    I: IntoIterator<Item = Provider>,
{
    let options = config.container.options(providers);
    let catalog = build_catalog(&config, &options);
    let bindings = catalog_bindings(&catalog)?;
    Ok(ContainerContext {
        config: Arc::new(config),
        bindings,
        catalog,
    })
}
