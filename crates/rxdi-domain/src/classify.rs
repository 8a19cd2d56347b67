//! Runtime classification of untyped tokens and providers
//!
//! Every predicate here is a pure structural test that returns `false` on
//! malformed input. Only [`resolve_token_key`] and [`Provider::from_value`]
//! fail, and both log the offending value before returning the error.
//!
//! Provider predicates are not mutually exclusive on untyped input (a record
//! may carry both `useValue` and `useFactory`). [`classify_provider`] applies
//! the fixed priority order class → existing → value → factory.

use crate::constants::{
    DEPS_FIELD, PROVIDE_FIELD, TOKEN_ID_FIELD, TOKEN_REFLECT_FIELD, TOKEN_REFLECT_NAME,
    USE_CLASS_FIELD, USE_EXISTING_FIELD, USE_FACTORY_FIELD, USE_VALUE_FIELD,
};
use crate::error::{Error, Result};
use crate::options::ContainerOptions;
use crate::provider::{Factory, Instance, Provider, ProviderKind};
use crate::token::{Token, TokenId, TokenKey};
use crate::value::{Callable, Record, Value};
use std::sync::Arc;
use tracing::error;

// ============================================================================
// Token predicates
// ============================================================================

/// Whether `value` carries the tagged-token marker with the expected sentinel
pub fn is_tagged_token(value: &Value) -> bool {
    value
        .as_record()
        .and_then(|record| record.get(TOKEN_REFLECT_FIELD))
        .and_then(Value::as_str)
        .is_some_and(|reflect_name| reflect_name == TOKEN_REFLECT_NAME)
}

/// Whether `value` is a concrete, directly instantiable constructor
pub fn is_service_ctor(value: &Value) -> bool {
    matches!(value, Value::Callable(Callable::Constructor(_)))
}

/// Whether `value` can be used as a token
pub fn is_token(value: &Value) -> bool {
    is_tagged_token(value) || is_service_ctor(value) || matches!(value, Value::Symbol(_))
}

/// Canonical key of an untyped token
///
/// Tagged tokens unwrap to their identifier (names are interned), symbols are
/// returned unchanged and constructors map to their type key.
pub fn resolve_token_key(value: &Value) -> Result<TokenKey> {
    to_token(value).map(|token| token.key())
}

/// Convert an untyped token into a typed [`Token`]
pub fn to_token(value: &Value) -> Result<Token> {
    let token = match value {
        Value::Symbol(symbol) => Some(Token::Symbol(symbol.clone())),
        Value::Callable(Callable::Constructor(ctor)) => Some(ctor.token()),
        Value::Record(record) if is_tagged_token(value) => {
            tagged_token_id(record).map(Token::Tagged)
        }
        _ => None,
    };
    token.ok_or_else(|| {
        error!(
            token = ?value,
            "The given token is invalid. Fail to provide this token."
        );
        Error::InvalidToken
    })
}

fn tagged_token_id(record: &Record) -> Option<TokenId> {
    match record.get(TOKEN_ID_FIELD)? {
        Value::String(name) => Some(TokenId::from(name.as_str())),
        Value::Symbol(symbol) => Some(TokenId::Symbol(symbol.clone())),
        _ => None,
    }
}

// ============================================================================
// Provider predicates
// ============================================================================

fn provider_record(value: &Value) -> Option<&Record> {
    value
        .as_record()
        .filter(|record| record.get(PROVIDE_FIELD).is_some_and(is_token))
}

/// `{ provide, useClass }` with a concrete `useClass`
pub fn is_class_provider(value: &Value) -> bool {
    provider_record(value)
        .and_then(|record| record.get(USE_CLASS_FIELD))
        .is_some_and(is_service_ctor)
}

/// `{ provide, useExisting }` with a valid `useExisting` token
pub fn is_existing_provider(value: &Value) -> bool {
    provider_record(value)
        .and_then(|record| record.get(USE_EXISTING_FIELD))
        .is_some_and(is_token)
}

/// `{ provide, useValue }` where `useValue` is an own field, whatever its value
pub fn is_value_provider(value: &Value) -> bool {
    provider_record(value).is_some_and(|record| record.has_own(USE_VALUE_FIELD))
}

/// `{ provide, useFactory, deps? }` with a callable `useFactory`
pub fn is_factory_provider(value: &Value) -> bool {
    provider_record(value)
        .and_then(|record| record.get(USE_FACTORY_FIELD))
        .and_then(Value::as_callable)
        .is_some_and(Callable::is_invocable)
}

/// Provider shape of `value`, checked in priority order
pub fn classify_provider(value: &Value) -> Option<ProviderKind> {
    if is_service_ctor(value) {
        Some(ProviderKind::Constructor)
    } else if is_class_provider(value) {
        Some(ProviderKind::Class)
    } else if is_existing_provider(value) {
        Some(ProviderKind::Existing)
    } else if is_value_provider(value) {
        Some(ProviderKind::Value)
    } else if is_factory_provider(value) {
        Some(ProviderKind::Factory)
    } else {
        None
    }
}

// ============================================================================
// Descriptor conversion
// ============================================================================

fn field<'a>(record: &'a Record, key: &str) -> Result<&'a Value> {
    record
        .get(key)
        .ok_or_else(|| Error::invalid_provider(format!("missing field `{key}`")))
}

fn factory_of(callable: &Callable) -> Option<Factory> {
    match callable {
        Callable::Function(factory) => Some(factory.clone()),
        Callable::Constructor(ctor) => {
            let ctor = ctor.clone();
            Some(Factory::new(move |_| Ok(ctor.instantiate())))
        }
        Callable::Abstract(_) => None,
    }
}

fn factory_deps(record: &Record) -> Result<Vec<Token>> {
    match record.get(DEPS_FIELD) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::List(items)) => items.iter().map(to_token).collect(),
        Some(other) => Err(Error::invalid_provider(format!(
            "`{DEPS_FIELD}` must be a list of tokens, got {}",
            other.type_name()
        ))),
    }
}

impl Provider {
    /// Convert an untyped provider descriptor into a typed provider
    ///
    /// Shapes are tried in the order of [`classify_provider`], so a record that
    /// matches several shapes becomes the first one that applies.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Some(kind) = classify_provider(value) else {
            error!(provider = ?value, "The given provider matches no provider shape.");
            return Err(Error::invalid_provider(format!(
                "{} is not a constructor or a provider record",
                value.type_name()
            )));
        };

        if let Value::Callable(Callable::Constructor(ctor)) = value {
            return Ok(Self::Constructor(ctor.clone()));
        }
        let record = value
            .as_record()
            .ok_or_else(|| Error::invalid_provider("provider descriptor is not a record"))?;
        let provide = to_token(field(record, PROVIDE_FIELD)?)?;

        match kind {
            ProviderKind::Class => match field(record, USE_CLASS_FIELD)? {
                Value::Callable(Callable::Constructor(ctor)) => Ok(Self::Class {
                    provide,
                    use_class: ctor.clone(),
                }),
                _ => Err(Error::invalid_provider("`useClass` is not a constructor")),
            },
            ProviderKind::Existing => Ok(Self::Existing {
                provide,
                use_existing: to_token(field(record, USE_EXISTING_FIELD)?)?,
            }),
            ProviderKind::Value => {
                let use_value = record.get_own(USE_VALUE_FIELD).cloned().unwrap_or_default();
                Ok(Self::Value {
                    provide,
                    use_value: Arc::new(use_value) as Instance,
                })
            }
            ProviderKind::Factory => {
                let use_factory = field(record, USE_FACTORY_FIELD)?
                    .as_callable()
                    .and_then(factory_of)
                    .ok_or_else(|| Error::invalid_provider("`useFactory` is not callable"))?;
                Ok(Self::Factory {
                    provide,
                    use_factory,
                    deps: factory_deps(record)?,
                })
            }
            ProviderKind::Constructor => Err(Error::invalid_provider(
                "constructor provider must be a bare constructor",
            )),
        }
    }
}

impl ContainerOptions {
    /// Options built from untyped provider descriptors
    pub fn from_values(values: &[Value], auto_bind_injectable: bool) -> Result<Self> {
        let providers = values
            .iter()
            .map(Provider::from_value)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            providers,
            auto_bind_injectable,
        })
    }
}
