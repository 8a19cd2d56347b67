//! Unique symbols
//!
//! A [`Symbol`] is an atomic key that is only equal to itself. Two symbols
//! created with the same description are still distinct. [`Symbol::for_key`]
//! is the exception: it returns the process-wide interned symbol for a key.

use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(1);

static INTERNED: Lazy<DashMap<String, Symbol>> = Lazy::new(DashMap::new);

/// Globally distinct atomic value
#[derive(Clone)]
pub struct Symbol {
    id: u64,
    description: Option<Arc<str>>,
}

impl Symbol {
    /// Create a new symbol with a description used for display only
    pub fn new<S: Into<String>>(description: S) -> Self {
        Self::allocate(Some(Arc::from(description.into())))
    }

    /// Create a new symbol without a description
    pub fn anonymous() -> Self {
        Self::allocate(None)
    }

    /// Get the interned symbol for `key`, creating it on first use
    pub fn for_key(key: &str) -> Self {
        if let Some(existing) = INTERNED.get(key) {
            return existing.value().clone();
        }
        INTERNED
            .entry(key.to_string())
            .or_insert_with(|| Self::new(key))
            .value()
            .clone()
    }

    /// Description given at creation, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Process-unique identity of this symbol
    pub fn id(&self) -> u64 {
        self.id
    }

    fn allocate(description: Option<Arc<str>>) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description,
        }
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "Symbol({description})#{}", self.id),
            None => write!(f, "Symbol()#{}", self.id),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or_default())
    }
}
