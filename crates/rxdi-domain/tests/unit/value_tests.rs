//! Unit tests for the untyped value model

use rxdi_domain::{Record, ServiceCtor, Symbol, Value};

#[derive(Default)]
struct Foo;

#[test]
fn test_record_lookup_walks_parent_chain() {
    let base = Record::new().with_field("a", 1).with_field("b", 2);
    let child = Record::inheriting(base).with_field("b", 3);

    assert!(matches!(child.get("a"), Some(Value::Number(n)) if (*n - 1.0).abs() < f64::EPSILON));
    assert!(matches!(child.get("b"), Some(Value::Number(n)) if (*n - 3.0).abs() < f64::EPSILON));
    assert!(child.get_own("a").is_none());
    assert!(!child.has_own("a"));
    assert!(child.has_own("b"));
    assert!(child.parent().is_some());
}

#[test]
fn test_insert_returns_previous_value() {
    let mut record = Record::new();

    assert!(record.insert("k", "v1").is_none());
    assert_eq!(
        record.insert("k", "v2").as_ref().and_then(Value::as_str),
        Some("v1")
    );
    assert_eq!(record.len(), 1);
}

#[test]
fn test_json_conversion() {
    let json = serde_json::json!({
        "name": "svc",
        "port": 8080,
        "tags": ["a", "b"],
        "nested": { "enabled": true },
        "missing": null
    });
    let value = Value::from(json);
    let record = value.as_record().expect("record");

    assert_eq!(record.get("name").and_then(Value::as_str), Some("svc"));
    assert_eq!(record.get("tags").and_then(Value::as_list).map(<[Value]>::len), Some(2));
    assert!(matches!(
        record.get("nested").and_then(Value::as_record).and_then(|r| r.get("enabled")),
        Some(Value::Bool(true))
    ));
    assert!(record.get("missing").is_some_and(Value::is_null));
    let keys: Vec<_> = record.own_fields().map(|(key, _)| key).collect();
    assert_eq!(keys.len(), 5);
}

#[test]
fn test_debug_dump_is_readable() {
    let value = Value::Record(
        Record::new()
            .with_field("provide", Symbol::new("svc"))
            .with_field("useClass", ServiceCtor::of::<Foo>())
            .with_field("useValue", "x"),
    );
    let dump = format!("{value:?}");

    assert!(dump.contains("\"provide\": Symbol(svc)"));
    assert!(dump.contains("[class "));
    assert!(dump.contains("\"useValue\": \"x\""));
}

#[test]
fn test_type_names() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::from(1).type_name(), "number");
    assert_eq!(Value::from(Symbol::anonymous()).type_name(), "symbol");
    assert_eq!(Value::Record(Record::new()).type_name(), "record");
}
