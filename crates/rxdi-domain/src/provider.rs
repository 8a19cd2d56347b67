//! Provider types
//!
//! A provider tells the container how to produce the value bound to a token.
//! [`Provider`] holds exactly one provider shape at a time.

use crate::error::Result;
use crate::token::{Token, TypeKey};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Type-erased service instance
pub type Instance = Arc<dyn Any + Send + Sync>;

type ConstructFn = dyn Fn() -> Instance + Send + Sync;
type FactoryFn = dyn Fn(&[Instance]) -> Result<Instance> + Send + Sync;

/// Concrete, directly instantiable service type
#[derive(Clone)]
pub struct ServiceCtor {
    key: TypeKey,
    construct: Arc<ConstructFn>,
}

impl ServiceCtor {
    /// Constructor for a type with a `Default` implementation
    pub fn of<T: Default + Send + Sync + 'static>() -> Self {
        Self::new(T::default)
    }

    /// Constructor for `T` built by `construct`
    pub fn new<T, F>(construct: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            key: TypeKey::of::<T>(),
            construct: Arc::new(move || Arc::new(construct()) as Instance),
        }
    }

    /// Key of the constructed type
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// The constructed type used as its own token
    pub fn token(&self) -> Token {
        Token::Type(self.key)
    }

    /// Create a fresh instance
    pub fn instantiate(&self) -> Instance {
        (self.construct)()
    }
}

impl fmt::Debug for ServiceCtor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceCtor({})", self.key.type_name())
    }
}

/// Factory invoked with the instances of its declared dependencies, in order
#[derive(Clone)]
pub struct Factory(Arc<FactoryFn>);

impl Factory {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn(&[Instance]) -> Result<Instance> + Send + Sync + 'static,
    {
        Self(Arc::new(factory))
    }

    /// Factory that ignores its arguments and always builds `T`
    pub fn from_fn<T, F>(factory: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::new(move |_| Ok(Arc::new(factory()) as Instance))
    }

    pub fn invoke(&self, deps: &[Instance]) -> Result<Instance> {
        (self.0)(deps)
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Factory(..)")
    }
}

/// Provider shape discriminant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Bare constructor: token and class are the same
    Constructor,
    Class,
    /// Alias of another token
    Existing,
    Value,
    Factory,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Constructor => "constructor",
            Self::Class => "class",
            Self::Existing => "existing",
            Self::Value => "value",
            Self::Factory => "factory",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binding instruction associating a token with a way to produce its value
#[derive(Clone)]
pub enum Provider {
    /// Shorthand: the constructor is both the token and the class
    Constructor(ServiceCtor),
    /// Resolve by instantiating `use_class`
    Class {
        provide: Token,
        use_class: ServiceCtor,
    },
    /// Resolve by re-resolving `use_existing`
    Existing { provide: Token, use_existing: Token },
    /// Resolve to a fixed value
    Value { provide: Token, use_value: Instance },
    /// Resolve by invoking `use_factory` with the values of `deps`
    Factory {
        provide: Token,
        use_factory: Factory,
        deps: Vec<Token>,
    },
}

impl Provider {
    pub fn constructor(ctor: ServiceCtor) -> Self {
        Self::Constructor(ctor)
    }

    pub fn class<P: Into<Token>>(provide: P, use_class: ServiceCtor) -> Self {
        Self::Class {
            provide: provide.into(),
            use_class,
        }
    }

    pub fn existing<P: Into<Token>, E: Into<Token>>(provide: P, use_existing: E) -> Self {
        Self::Existing {
            provide: provide.into(),
            use_existing: use_existing.into(),
        }
    }

    pub fn value<P: Into<Token>, V: Any + Send + Sync>(provide: P, value: V) -> Self {
        Self::Value {
            provide: provide.into(),
            use_value: Arc::new(value),
        }
    }

    /// Factory provider without dependencies; see [`Provider::with_deps`]
    pub fn factory<P: Into<Token>>(provide: P, use_factory: Factory) -> Self {
        Self::Factory {
            provide: provide.into(),
            use_factory,
            deps: Vec::new(),
        }
    }

    /// Set the dependency list of a factory provider. Other shapes are
    /// returned unchanged and the ignored deps are logged.
    #[must_use]
    pub fn with_deps<I, T>(self, new_deps: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        let deps: Vec<Token> = new_deps.into_iter().map(Into::into).collect();
        match self {
            Self::Factory {
                provide,
                use_factory,
                ..
            } => Self::Factory {
                provide,
                use_factory,
                deps,
            },
            other => {
                if !deps.is_empty() {
                    warn!(
                        provide = ?other.provide(),
                        kind = %other.kind(),
                        ignored = deps.len(),
                        "Dependencies only apply to factory providers; ignoring them"
                    );
                }
                other
            }
        }
    }

    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Constructor(_) => ProviderKind::Constructor,
            Self::Class { .. } => ProviderKind::Class,
            Self::Existing { .. } => ProviderKind::Existing,
            Self::Value { .. } => ProviderKind::Value,
            Self::Factory { .. } => ProviderKind::Factory,
        }
    }

    /// Token this provider binds
    pub fn provide(&self) -> Token {
        match self {
            Self::Constructor(ctor) => ctor.token(),
            Self::Class { provide, .. }
            | Self::Existing { provide, .. }
            | Self::Value { provide, .. }
            | Self::Factory { provide, .. } => provide.clone(),
        }
    }
}

impl From<ServiceCtor> for Provider {
    fn from(ctor: ServiceCtor) -> Self {
        Self::Constructor(ctor)
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constructor(ctor) => f.debug_tuple("Constructor").field(ctor).finish(),
            Self::Class { provide, use_class } => f
                .debug_struct("Class")
                .field("provide", provide)
                .field("use_class", use_class)
                .finish(),
            Self::Existing {
                provide,
                use_existing,
            } => f
                .debug_struct("Existing")
                .field("provide", provide)
                .field("use_existing", use_existing)
                .finish(),
            Self::Value { provide, .. } => f
                .debug_struct("Value")
                .field("provide", provide)
                .finish_non_exhaustive(),
            Self::Factory { provide, deps, .. } => f
                .debug_struct("Factory")
                .field("provide", provide)
                .field("deps", deps)
                .finish_non_exhaustive(),
        }
    }
}
