//! Dependency injection bridge
//!
//! Turns container options into a binding table and registers it,
//! together with the configuration, in a `dill` catalog.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`bindings`] | Binding table keyed by canonical token |
//! | [`registration`] | Options → binding table |
//! | [`catalog`] | dill catalog construction |
//! | [`bootstrap`] | Composition root |

pub mod bindings;
pub mod bootstrap;
pub mod catalog;
pub mod registration;

pub use bindings::{Binding, BindingTable, BindingTarget};
pub use bootstrap::{ContainerContext, init_container};
pub use catalog::{build_catalog, catalog_bindings, catalog_config};
pub use registration::{register_providers, register_values};
