use ingressway_core::ir::{ServerId, UpstreamServer};
use ingressway_core::render::RenderedConfig;
use integration_tests::harness::load_fixture;
use pretty_assertions::assert_eq;

#[test]
fn loaded_fixture_is_in_canonical_order() {
    // Act
    let ingress = load_fixture("cluster.yaml");

    // Assert
    assert!(ingress.is_sorted());

    let upstreams: Vec<&str> = ingress.upstreams.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(
        upstreams,
        vec![
            "default-api-8080",
            "default-db-5432",
            "default-empty-80",
            "default-shop-80",
            "kube-system-dns-53",
        ]
    );

    let servers: Vec<&str> = ingress.servers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(servers, vec!["_", "api.example.com", "shop.example.com"]);
}

#[test]
fn locations_end_with_root() {
    // Act
    let ingress = load_fixture("cluster.yaml");

    // Assert
    let shop: Vec<&str> = ingress.servers[2]
        .locations
        .iter()
        .map(|l| l.path.as_str())
        .collect();
    assert_eq!(shop, vec!["/static", "/api/v1", "/"]);

    let api: Vec<&str> = ingress.servers[1]
        .locations
        .iter()
        .map(|l| l.path.as_str())
        .collect();
    assert_eq!(api, vec!["/admin", "/"]);
}

#[test]
fn backends_are_ordered_by_address() {
    // Act
    let ingress = load_fixture("cluster.yaml");

    // Assert
    let shop = ingress.upstream("default-shop-80").unwrap();
    assert_eq!(
        shop.backends,
        vec![
            UpstreamServer::new("10.0.0.11", "80"),
            UpstreamServer::new("10.0.0.12", "80"),
        ]
    );
}

#[test]
fn back_references_follow_sorted_hosts() {
    // Act
    let ingress = load_fixture("cluster.yaml");

    // Assert
    for (idx, server) in ingress.servers.iter().enumerate() {
        for location in &server.locations {
            assert_eq!(location.server, Some(ServerId(idx)), "{}", server.name);
        }
    }
}

#[test]
fn raw_transport_rules_are_sorted_by_path() {
    // Act
    let ingress = load_fixture("cluster.yaml");

    // Assert
    let tcp: Vec<&str> = ingress.tcp_upstreams.iter().map(|l| l.path.as_str()).collect();
    assert_eq!(tcp, vec!["9000", "5432"]);
    assert_eq!(ingress.udp_upstreams[0].upstream.name, "kube-system-dns-53");
}

#[test]
fn every_format_produces_the_same_configuration() {
    // Act
    let yaml = load_fixture("cluster.yaml");
    let json = load_fixture("cluster.json");
    let hcl = load_fixture("cluster.hcl");

    // Assert
    assert_eq!(yaml, json);
    assert_eq!(yaml, hcl);
}

#[test]
fn render_output_is_byte_stable_across_producer_order() {
    // Arrange
    let yaml = load_fixture("cluster.yaml");
    let json = load_fixture("cluster.json");

    // Act
    let left = serde_json::to_string_pretty(&RenderedConfig::from_ingress(&yaml)).unwrap();
    let right = serde_json::to_string_pretty(&RenderedConfig::from_ingress(&json)).unwrap();

    // Assert
    assert_eq!(left, right);
}

#[test]
fn sorting_a_loaded_fixture_again_changes_nothing() {
    // Arrange
    let ingress = load_fixture("cluster.hcl");
    let mut resorted = ingress.clone();

    // Act
    resorted.sort();

    // Assert
    assert_eq!(resorted, ingress);
}
