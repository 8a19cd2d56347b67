//! Binding table handed to the container
//!
//! One [`Binding`] per canonical token key. The table is a registration
//! record only; producing values from it is the container's concern.

use indexmap::IndexMap;
use rxdi_domain::{Factory, Instance, Provider, ProviderKind, ServiceCtor, Token, TokenKey};
use std::fmt;

/// How the value of a binding is produced
#[derive(Clone)]
pub enum BindingTarget {
    /// Instantiate this constructor
    Class(ServiceCtor),
    /// Re-resolve another key
    Alias(TokenKey),
    /// Fixed value
    Value(Instance),
    /// Invoke the factory with the values of `deps`
    Factory {
        factory: Factory,
        deps: Vec<TokenKey>,
    },
}

impl fmt::Debug for BindingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(ctor) => f.debug_tuple("Class").field(ctor).finish(),
            Self::Alias(key) => f.debug_tuple("Alias").field(key).finish(),
            Self::Value(_) => f.write_str("Value(..)"),
            Self::Factory { deps, .. } => f
                .debug_struct("Factory")
                .field("deps", deps)
                .finish_non_exhaustive(),
        }
    }
}

/// A provider reduced to canonical keys
#[derive(Clone, Debug)]
pub struct Binding {
    key: TokenKey,
    kind: ProviderKind,
    target: BindingTarget,
}

impl Binding {
    pub fn from_provider(provider: &Provider) -> Self {
        let target = match provider {
            Provider::Constructor(ctor) => BindingTarget::Class(ctor.clone()),
            Provider::Class { use_class, .. } => BindingTarget::Class(use_class.clone()),
            Provider::Existing { use_existing, .. } => BindingTarget::Alias(use_existing.key()),
            Provider::Value { use_value, .. } => BindingTarget::Value(use_value.clone()),
            Provider::Factory {
                use_factory, deps, ..
            } => BindingTarget::Factory {
                factory: use_factory.clone(),
                deps: deps.iter().map(Token::key).collect(),
            },
        };
        Self {
            key: provider.provide().key(),
            kind: provider.kind(),
            target,
        }
    }

    pub fn key(&self) -> &TokenKey {
        &self.key
    }

    /// Kind of the provider this binding came from
    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    pub fn target(&self) -> &BindingTarget {
        &self.target
    }
}

/// Bindings in order of first registration
#[derive(Clone, Debug, Default)]
pub struct BindingTable {
    bindings: IndexMap<TokenKey, Binding>,
    auto_bind_injectable: bool,
}

impl BindingTable {
    pub fn new(auto_bind_injectable: bool) -> Self {
        Self {
            bindings: IndexMap::new(),
            auto_bind_injectable,
        }
    }

    /// Insert a binding, returning the one it replaced
    pub fn insert(&mut self, binding: Binding) -> Option<Binding> {
        self.bindings.insert(binding.key.clone(), binding)
    }

    pub fn get(&self, key: &TokenKey) -> Option<&Binding> {
        self.bindings.get(key)
    }

    pub fn contains(&self, key: &TokenKey) -> bool {
        self.bindings.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.values()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Whether the container may bind unregistered concrete types itself
    pub fn auto_bind_injectable(&self) -> bool {
        self.auto_bind_injectable
    }
}
