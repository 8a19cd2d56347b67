//! Unit tests for typed providers

use rxdi_domain::{
    ContainerOptions, Error, Factory, Instance, Provider, ProviderKind, ServiceCtor, Symbol, Token,
};
use std::sync::Arc;

use crate::classify::capture_logs;

#[derive(Default)]
struct ConsoleLogger;

struct Counter(u32);

#[test]
fn test_service_ctor_instantiates_its_type() {
    let ctor = ServiceCtor::new(|| Counter(7));
    let instance = ctor.instantiate();

    let counter = instance.downcast_ref::<Counter>().expect("Counter instance");
    assert_eq!(counter.0, 7);
    assert_eq!(ctor.token(), Token::of::<Counter>());
}

#[test]
fn test_each_instantiation_is_fresh() {
    let ctor = ServiceCtor::new(|| Counter(1));

    assert!(!Arc::ptr_eq(&ctor.instantiate(), &ctor.instantiate()));
}

#[test]
fn test_constructor_provider_binds_its_own_type() {
    let provider = Provider::from(ServiceCtor::of::<ConsoleLogger>());

    assert_eq!(provider.kind(), ProviderKind::Constructor);
    assert_eq!(provider.provide(), Token::of::<ConsoleLogger>());
}

#[test]
fn test_provider_kinds() {
    let sym = Symbol::new("svc");
    let other = Symbol::new("other");

    let class = Provider::class(sym.clone(), ServiceCtor::of::<ConsoleLogger>());
    let existing = Provider::existing(sym.clone(), other);
    let value = Provider::value(sym.clone(), 1_u8);
    let factory = Provider::factory(sym.clone(), Factory::from_fn(|| 2_u8));

    assert_eq!(class.kind(), ProviderKind::Class);
    assert_eq!(existing.kind(), ProviderKind::Existing);
    assert_eq!(value.kind(), ProviderKind::Value);
    assert_eq!(factory.kind(), ProviderKind::Factory);
    for provider in [class, existing, value, factory] {
        assert_eq!(provider.provide(), Token::Symbol(sym.clone()));
    }
}

#[test]
fn test_with_deps_sets_factory_dependencies() {
    let dep = Symbol::new("dep");
    let provider = Provider::factory(Symbol::new("svc"), Factory::from_fn(|| 0_u8))
        .with_deps([dep.clone()]);

    match provider {
        Provider::Factory { deps, .. } => assert_eq!(deps, vec![Token::Symbol(dep)]),
        other => panic!("Expected factory provider, got {other:?}"),
    }
}

#[test]
fn test_with_deps_leaves_other_shapes_unchanged() {
    let provider = Provider::value(Symbol::new("v"), 1_u8).with_deps([Symbol::new("dep")]);

    assert_eq!(provider.kind(), ProviderKind::Value);
}

#[test]
fn test_with_deps_on_non_factory_logs_ignored_deps() {
    let output = capture_logs(|| {
        let deps = [Symbol::new("a"), Symbol::new("b")];
        let provider =
            Provider::existing(Symbol::new("alias"), Symbol::new("target")).with_deps(deps);
        assert_eq!(provider.kind(), ProviderKind::Existing);
    });

    assert!(output.contains("WARN"));
    assert!(output.contains("Dependencies only apply to factory providers"));
    assert!(output.contains("kind=existing"));
    assert!(output.contains("ignored=2"));
}

#[test]
fn test_with_deps_on_factory_logs_nothing() {
    let output = capture_logs(|| {
        let _ = Provider::factory(Symbol::new("svc"), Factory::from_fn(|| 0_u8))
            .with_deps([Symbol::new("dep")]);
    });

    assert!(output.is_empty());
}

#[test]
fn test_factory_receives_dependencies_in_order() {
    let factory = Factory::new(|deps: &[Instance]| {
        let total: u32 = deps
            .iter()
            .filter_map(|dep| dep.downcast_ref::<u32>())
            .sum();
        Ok(Arc::new(total) as Instance)
    });

    let deps: Vec<Instance> = vec![Arc::new(2_u32), Arc::new(3_u32)];
    let result = factory.invoke(&deps).expect("factory result");

    assert_eq!(result.downcast_ref::<u32>(), Some(&5));
}

#[test]
fn test_factory_errors_propagate() {
    let factory = Factory::new(|_| Err(Error::factory("boom")));

    match factory.invoke(&[]) {
        Err(Error::Factory { message, .. }) => assert_eq!(message, "boom"),
        other => panic!("Expected factory error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_container_options_builder() {
    let options = ContainerOptions::new()
        .with_provider(ServiceCtor::of::<ConsoleLogger>())
        .with_providers([Provider::value(Symbol::new("port"), 8080_u16)])
        .with_auto_bind_injectable(true);

    assert_eq!(options.providers.len(), 2);
    assert!(options.auto_bind_injectable);
    assert!(!ContainerOptions::default().auto_bind_injectable);
}

#[test]
fn test_provider_kind_display() {
    assert_eq!(ProviderKind::Existing.to_string(), "existing");
    assert_eq!(ProviderKind::Constructor.as_str(), "constructor");
}
