use ingressway_core::conf::{ConfigError, load_ingress_config};
use integration_tests::harness::fixture_path;

#[test]
fn non_boolean_ssl_redirect_is_rejected_while_parsing() {
    // Act
    let result = load_ingress_config(&fixture_path("bad_ssl_redirect.json"));

    // Assert
    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "{err:?}");
    assert!(err.to_string().contains("bad_ssl_redirect.json"));
}

#[test]
fn location_with_unknown_upstream_is_rejected() {
    // Act
    let result = load_ingress_config(&fixture_path("unknown_upstream.yaml"));

    // Assert
    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "location '/checkout' references unknown upstream 'checkout'"
    );
}

#[test]
fn missing_fixture_is_a_read_error() {
    // Act
    let result = load_ingress_config(&fixture_path("does_not_exist.yaml"));

    // Assert
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}
