use ingressway_core::conf::load_ingress_config;
use ingressway_core::ir::IngressConfig;
use std::path::PathBuf;

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

pub fn load_fixture(file: &str) -> IngressConfig {
    let path = fixture_path(file);
    load_ingress_config(&path)
        .unwrap_or_else(|e| panic!("failed to load fixture {}: {e}", path.display()))
}
