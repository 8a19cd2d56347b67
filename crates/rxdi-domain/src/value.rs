//! Untyped value model
//!
//! Values crossing an untyped boundary (descriptors assembled at runtime,
//! JSON produced by another copy of this crate) are represented as [`Value`].
//! The classification predicates in [`crate::classify`] inspect these values
//! structurally.

use crate::provider::{Factory, ServiceCtor};
use crate::symbol::Symbol;
use crate::token::TypeKey;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Callable value
#[derive(Clone)]
pub enum Callable {
    /// Concrete, instantiable service type
    Constructor(ServiceCtor),
    /// Abstract-only construct: names a type but cannot be instantiated
    Abstract(TypeKey),
    /// Plain function (closure)
    Function(Factory),
}

impl Callable {
    /// Whether calling this value can produce anything
    pub fn is_invocable(&self) -> bool {
        !matches!(self, Self::Abstract(_))
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constructor(ctor) => write!(f, "[class {}]", ctor.key().type_name()),
            Self::Abstract(key) => write!(f, "[abstract class {}]", key.type_name()),
            Self::Function(_) => f.write_str("[function]"),
        }
    }
}

/// Record with ordered own fields and an optional parent whose fields are
/// inherited
#[derive(Clone, Default)]
pub struct Record {
    fields: IndexMap<String, Value>,
    parent: Option<Arc<Record>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty record inheriting every field of `parent`
    pub fn inheriting(parent: Record) -> Self {
        Self {
            fields: IndexMap::new(),
            parent: Some(Arc::new(parent)),
        }
    }

    #[must_use]
    pub fn with_field<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Set an own field, returning the previous own value
    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    /// Look a field up on this record, then along the parent chain
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut current = self;
        loop {
            if let Some(value) = current.fields.get(key) {
                return Some(value);
            }
            current = current.parent.as_deref()?;
        }
    }

    /// Look a field up on this record only
    pub fn get_own(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Whether `key` is an own field, whatever its value
    pub fn has_own(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn own_fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn parent(&self) -> Option<&Record> {
        self.parent.as_deref()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        map.entries(self.fields.iter());
        if let Some(parent) = &self.parent {
            map.entry(&"[[parent]]", parent);
        }
        map.finish()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            parent: None,
        }
    }
}

/// Any value at the untyped boundary
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Symbol(Symbol),
    List(Vec<Value>),
    Record(Record),
    Callable(Callable),
}

impl Value {
    /// Short name of the value's shape, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::List(_) => "list",
            Self::Record(_) => "record",
            Self::Callable(_) => "callable",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Self::Callable(callable) => Some(callable),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Symbol(symbol) => write!(f, "{symbol:?}"),
            Self::List(items) => f.debug_list().entries(items).finish(),
            Self::Record(record) => write!(f, "{record:?}"),
            Self::Callable(callable) => write!(f, "{callable:?}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<Callable> for Value {
    fn from(callable: Callable) -> Self {
        Self::Callable(callable)
    }
}

impl From<ServiceCtor> for Value {
    fn from(ctor: ServiceCtor) -> Self {
        Self::Callable(Callable::Constructor(ctor))
    }
}

impl From<Factory> for Value {
    fn from(factory: Factory) -> Self {
        Self::Callable(Callable::Function(factory))
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(fields) => Self::Record(fields.into_iter().collect()),
        }
    }
}
