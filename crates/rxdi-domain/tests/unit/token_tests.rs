//! Unit tests for typed tokens

use rxdi_domain::{Symbol, TaggedToken, Token, TokenId, TokenKey, TypeKey, TypeToken, TypedToken};

#[allow(dead_code)]
trait Greeter {}

#[allow(dead_code)]
struct Config;

#[test]
fn test_tagged_token_with_symbol_id_keys_to_that_symbol() {
    let id = Symbol::new("config");
    let token: TaggedToken<Config> = TaggedToken::new(id.clone());

    assert_eq!(token.token().key(), TokenKey::Symbol(id));
}

#[test]
fn test_tagged_token_with_name_keys_to_interned_symbol() {
    let a: TaggedToken<Config> = TaggedToken::new("token_tests.config");
    let b: TaggedToken<Config> = TaggedToken::new(String::from("token_tests.config"));

    assert_eq!(a, b);
    assert_eq!(
        a.token().key(),
        TokenKey::Symbol(Symbol::for_key("token_tests.config"))
    );
}

#[test]
fn test_tagged_token_carries_sentinel() {
    let token: TaggedToken<u32> = TaggedToken::new("port");

    assert_eq!(token.reflect_name(), "@@RXDI Token v1@@");
    assert_eq!(token.token_id(), &TokenId::from("port"));
}

#[test]
fn test_symbol_token_keys_to_itself() {
    let symbol = Symbol::new("db");
    let token = Token::from(symbol.clone());

    assert_eq!(token.key(), TokenKey::Symbol(symbol));
}

#[test]
fn test_type_tokens_key_by_type() {
    let abstract_token = TypeToken::<dyn Greeter>::new();

    assert_eq!(abstract_token.key(), TypeKey::of::<dyn Greeter>());
    assert_eq!(Token::of::<dyn Greeter>(), Token::from(abstract_token));
    assert_ne!(Token::of::<dyn Greeter>(), Token::of::<Config>());
    assert!(TypeKey::of::<dyn Greeter>().type_name().contains("Greeter"));
}

fn value_type_name<T: TypedToken>(_token: &T) -> &'static str {
    std::any::type_name::<T::Value>()
}

#[test]
fn test_typed_token_exposes_value_type() {
    let tagged: TaggedToken<Config> = TaggedToken::new("cfg");
    let typed = TypeToken::<dyn Greeter>::new();

    assert!(value_type_name(&tagged).ends_with("Config"));
    assert!(value_type_name(&typed).contains("Greeter"));
    assert_eq!(TypedToken::token(&tagged), Token::Tagged(TokenId::from("cfg")));
}

