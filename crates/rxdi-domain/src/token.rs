//! Token types
//!
//! A token is the lookup key of a dependency. Three kinds exist:
//!
//! | Kind | Type | Value type |
//! |------|------|------------|
//! | Tagged token | [`TaggedToken<T>`] | `T` |
//! | Type reference | [`TypeToken<T>`] / [`TypeKey`] | `T` (may be `dyn Trait`) |
//! | Symbol | [`Symbol`] | untyped |
//!
//! All of them erase into [`Token`], and every token maps to one canonical
//! [`TokenKey`].

use crate::constants::{TOKEN_ID_FIELD, TOKEN_REFLECT_FIELD, TOKEN_REFLECT_NAME};
use crate::symbol::Symbol;
use crate::value::{Record, Value};
use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

/// Identifier wrapped by a tagged token
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenId {
    /// Plain name, canonicalised through [`Symbol::for_key`]
    Name(Arc<str>),
    /// Unique symbol
    Symbol(Symbol),
}

impl TokenId {
    /// Canonical symbol for this identifier
    pub fn to_symbol(&self) -> Symbol {
        match self {
            Self::Name(name) => Symbol::for_key(name),
            Self::Symbol(symbol) => symbol.clone(),
        }
    }

    /// Untyped form of this identifier
    pub fn to_value(&self) -> Value {
        match self {
            Self::Name(name) => Value::String(name.to_string()),
            Self::Symbol(symbol) => Value::Symbol(symbol.clone()),
        }
    }
}

impl From<&str> for TokenId {
    fn from(name: &str) -> Self {
        Self::Name(Arc::from(name))
    }
}

impl From<String> for TokenId {
    fn from(name: String) -> Self {
        Self::Name(Arc::from(name))
    }
}

impl From<Symbol> for TokenId {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "\"{name}\""),
            Self::Symbol(symbol) => write!(f, "{symbol}"),
        }
    }
}

/// Key identifying a Rust type, including unsized ones such as `dyn Trait`
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Key of `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Type name, for diagnostics only
    pub fn type_name(&self) -> &'static str {
        self.name
    }

    pub fn id(&self) -> TypeId {
        self.id
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Token wrapping an identifier and carrying the value type `T`
///
/// Recognition of tagged tokens at the untyped boundary compares the marker
/// field against [`TOKEN_REFLECT_NAME`] and never relies on type identity, so
/// tokens built by a second copy of this crate in the same process still match.
pub struct TaggedToken<T: ?Sized> {
    reflect_name: &'static str,
    token_id: TokenId,
    _value: PhantomData<fn() -> Box<T>>,
}

impl<T: ?Sized> TaggedToken<T> {
    /// Create a tagged token for the given identifier
    pub fn new<I: Into<TokenId>>(token_id: I) -> Self {
        Self {
            reflect_name: TOKEN_REFLECT_NAME,
            token_id: token_id.into(),
            _value: PhantomData,
        }
    }

    pub fn token_id(&self) -> &TokenId {
        &self.token_id
    }

    /// Marker sentinel, always [`TOKEN_REFLECT_NAME`]
    pub fn reflect_name(&self) -> &'static str {
        self.reflect_name
    }

    /// Erase the value type
    pub fn token(&self) -> Token {
        Token::Tagged(self.token_id.clone())
    }

    /// Structural form: a record with the marker and id fields
    pub fn to_value(&self) -> Value {
        Value::Record(
            Record::new()
                .with_field(TOKEN_REFLECT_FIELD, Value::String(self.reflect_name.to_string()))
                .with_field(TOKEN_ID_FIELD, self.token_id.to_value()),
        )
    }
}

impl<T: ?Sized> Clone for TaggedToken<T> {
    fn clone(&self) -> Self {
        Self {
            reflect_name: self.reflect_name,
            token_id: self.token_id.clone(),
            _value: PhantomData,
        }
    }
}

impl<T: ?Sized> PartialEq for TaggedToken<T> {
    fn eq(&self, other: &Self) -> bool {
        self.token_id == other.token_id
    }
}

impl<T: ?Sized> Eq for TaggedToken<T> {}

impl<T: ?Sized> fmt::Debug for TaggedToken<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedToken")
            .field("token_id", &self.token_id)
            .field("value_type", &std::any::type_name::<T>())
            .finish()
    }
}

/// Token naming the type `T` itself
pub struct TypeToken<T: ?Sized>(PhantomData<fn() -> Box<T>>);

impl<T: ?Sized + 'static> TypeToken<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }

    pub fn key(&self) -> TypeKey {
        TypeKey::of::<T>()
    }
}

impl<T: ?Sized + 'static> Default for TypeToken<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for TypeToken<T> {
    fn clone(&self) -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Copy for TypeToken<T> {}

impl<T: ?Sized> fmt::Debug for TypeToken<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeToken({})", std::any::type_name::<T>())
    }
}

/// Token whose resolved value type is known statically
pub trait TypedToken {
    /// Type of the value this token resolves to
    type Value: ?Sized;

    /// Erased token
    fn token(&self) -> Token;
}

impl<T: ?Sized> TypedToken for TaggedToken<T> {
    type Value = T;

    fn token(&self) -> Token {
        TaggedToken::token(self)
    }
}

impl<T: ?Sized + 'static> TypedToken for TypeToken<T> {
    type Value = T;

    fn token(&self) -> Token {
        Token::Type(self.key())
    }
}

/// Erased token
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// Tagged token identifier
    Tagged(TokenId),
    /// Type reference, concrete or abstract
    Type(TypeKey),
    /// Bare symbol
    Symbol(Symbol),
}

impl Token {
    /// Token naming the type `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::Type(TypeKey::of::<T>())
    }

    /// Canonical key of this token
    pub fn key(&self) -> TokenKey {
        match self {
            Self::Tagged(id) => TokenKey::Symbol(id.to_symbol()),
            Self::Type(key) => TokenKey::Type(*key),
            Self::Symbol(symbol) => TokenKey::Symbol(symbol.clone()),
        }
    }
}

impl From<Symbol> for Token {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

impl From<TypeKey> for Token {
    fn from(key: TypeKey) -> Self {
        Self::Type(key)
    }
}

impl<T: ?Sized> From<TaggedToken<T>> for Token {
    fn from(token: TaggedToken<T>) -> Self {
        Self::Tagged(token.token_id)
    }
}

impl<T: ?Sized> From<&TaggedToken<T>> for Token {
    fn from(token: &TaggedToken<T>) -> Self {
        token.token()
    }
}

impl<T: ?Sized + 'static> From<TypeToken<T>> for Token {
    fn from(token: TypeToken<T>) -> Self {
        Self::Type(token.key())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tagged(id) => write!(f, "TaggedToken({id})"),
            Self::Type(key) => write!(f, "{key}"),
            Self::Symbol(symbol) => write!(f, "{symbol}"),
        }
    }
}

/// Canonical key a token resolves to
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKey {
    Symbol(Symbol),
    Type(TypeKey),
}

impl fmt::Display for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(symbol) => write!(f, "{symbol}"),
            Self::Type(key) => write!(f, "{key}"),
        }
    }
}
