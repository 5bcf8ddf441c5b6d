use ingressway_core::ir::default_backend;
use ingressway_core::render::RenderedConfig;
use integration_tests::harness::load_fixture;
use pretty_assertions::assert_eq;

fn decisions(rendered: &RenderedConfig, host: &str) -> Vec<(String, bool)> {
    rendered
        .servers
        .iter()
        .find(|s| s.name == host)
        .unwrap()
        .locations
        .iter()
        .map(|l| (l.path.clone(), l.ssl_redirect))
        .collect()
}

#[test]
fn host_policy_is_resolved_per_server() {
    // Act
    let rendered = RenderedConfig::from_ingress(&load_fixture("cluster.yaml"));

    // Assert
    let hosts: Vec<(&str, bool)> = rendered
        .servers
        .iter()
        .map(|s| (s.name.as_str(), s.ssl_redirect))
        .collect();
    assert_eq!(
        hosts,
        vec![
            ("_", false),
            ("api.example.com", false),
            ("shop.example.com", true),
        ]
    );
}

#[test]
fn routes_inherit_or_override_host_policy() {
    // Act
    let rendered = RenderedConfig::from_ingress(&load_fixture("cluster.yaml"));

    // Assert
    assert_eq!(
        decisions(&rendered, "shop.example.com"),
        vec![
            ("/static".to_string(), false),
            ("/api/v1".to_string(), true),
            ("/".to_string(), true),
        ]
    );
    assert_eq!(
        decisions(&rendered, "api.example.com"),
        vec![("/admin".to_string(), true), ("/".to_string(), false)]
    );
    assert_eq!(
        decisions(&rendered, "_"),
        vec![("/".to_string(), false)]
    );
    assert_eq!(rendered.redirecting_locations(), 3);
}

#[test]
fn raw_transport_rules_never_redirect() {
    // Act
    let rendered = RenderedConfig::from_ingress(&load_fixture("cluster.json"));

    // Assert
    assert!(rendered.tcp_upstreams.iter().all(|l| !l.ssl_redirect));
    assert!(rendered.udp_upstreams.iter().all(|l| !l.ssl_redirect));
}

#[test]
fn default_server_routes_to_default_backend() {
    // Act
    let rendered = RenderedConfig::from_ingress(&load_fixture("cluster.yaml"));

    // Assert
    let catch_all = &rendered.servers[0].locations[0];
    assert!(catch_all.is_def_backend);
    assert_eq!(catch_all.upstream.name, "default-empty-80");
    assert_eq!(catch_all.upstream.backends, vec![default_backend()]);
}
