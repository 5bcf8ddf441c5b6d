use integration_tests::harness::{CapturedEvent, init_test_tracing, load_fixture};
use std::sync::{Arc, Mutex};
use tracing::Level;

fn find<'a>(events: &'a [CapturedEvent], message: &str) -> Option<&'a CapturedEvent> {
    events.iter().find(|e| e.message() == Some(message))
}

#[test]
fn loading_emits_structured_events() {
    // Arrange
    let events = Arc::new(Mutex::new(Vec::new()));
    init_test_tracing(events.clone());

    // Act
    load_fixture("cluster.yaml");

    // Assert
    let events = events.lock().unwrap();

    let sorted = find(&events, "sorted ingress configuration").expect("expected a sort event");
    assert_eq!(sorted.level, Level::DEBUG);
    assert_eq!(sorted.field("servers"), Some("3"));
    assert_eq!(sorted.field("tcp_upstreams"), Some("2"));

    let lowered = find(&events, "lowered ingress snapshot").expect("expected a lower event");
    assert_eq!(lowered.field("locations"), Some("6"));

    let loaded = find(&events, "loaded ingress configuration").expect("expected a load event");
    assert_eq!(loaded.level, Level::INFO);
    assert_eq!(loaded.target, "ingressway_core::conf::loader");
    assert_eq!(loaded.field("upstreams"), Some("5"));
}
