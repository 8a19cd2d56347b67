//! # Domain Layer
//!
//! Token and provider vocabulary for dependency injection. Nothing here
//! stores bindings or resolves values; that is the container's job. This
//! crate defines what a valid key and a valid binding are, and classifies
//! untyped values before they are handed over.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`symbol`] | Unique and interned symbols |
//! | [`token`] | Tagged tokens, type tokens and canonical keys |
//! | [`provider`] | Provider sum type, constructors and factories |
//! | [`options`] | Container options |
//! | [`value`] | Untyped value model |
//! | [`classify`] | Structural token and provider predicates |
//! | [`error`] | Error type |

pub mod classify;
pub mod constants;
pub mod error;
pub mod options;
pub mod provider;
pub mod symbol;
pub mod token;
pub mod value;

// Re-export commonly used types
pub use classify::{
    classify_provider, is_class_provider, is_existing_provider, is_factory_provider,
    is_service_ctor, is_tagged_token, is_token, is_value_provider, resolve_token_key, to_token,
};
pub use error::{Error, Result};
pub use options::ContainerOptions;
pub use provider::{Factory, Instance, Provider, ProviderKind, ServiceCtor};
pub use symbol::Symbol;
pub use token::{TaggedToken, Token, TokenId, TokenKey, TypeKey, TypeToken, TypedToken};
pub use value::{Callable, Record, Value};
