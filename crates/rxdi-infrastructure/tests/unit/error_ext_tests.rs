//! Error extension tests

use rxdi_domain::Error;
use rxdi_infrastructure::ErrorContext;

fn failing_io() -> std::io::Result<()> {
    Err(std::io::Error::other("disk full"))
}

#[test]
fn test_context_wraps_as_infrastructure_error() {
    let error = failing_io().context("Writing bindings").unwrap_err();

    match error {
        Error::Infrastructure { message, source } => {
            assert_eq!(message, "Writing bindings: disk full");
            assert!(source.is_some());
        }
        other => panic!("Expected Infrastructure error, got {other:?}"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    assert!(Ok::<_, std::io::Error>(1)
        .with_context(|| -> String { panic!("context built on success") })
        .is_ok());

    let error = failing_io().with_context(|| "lazy".to_string()).unwrap_err();
    assert!(error.to_string().contains("lazy: disk full"));
}

#[test]
fn test_config_context_wraps_as_configuration_error() {
    let error = failing_io().config_context("Loading rxdi.toml").unwrap_err();

    assert!(matches!(error, Error::Configuration { .. }));
}
