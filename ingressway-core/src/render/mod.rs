//! Read-only projection of a sorted [`IngressConfig`] with every policy
//! decision already made. This is what a template renderer consumes.

use crate::ir::{IngressConfig, Location, Upstream, UpstreamServer};
use serde::Serialize;


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedConfig {
    pub upstreams: Vec<RenderedUpstream>,
    pub servers: Vec<RenderedServer>,
    pub tcp_upstreams: Vec<RenderedLocation>,
    pub udp_upstreams: Vec<RenderedLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedUpstream {
    pub name: String,

    /// Never empty: pools without members point at the default backend.
    pub backends: Vec<UpstreamServer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedServer {
    pub name: String,
    pub ssl: bool,
    pub ssl_certificate: String,
    pub ssl_certificate_key: String,
    pub ssl_pem_checksum: String,
    pub ssl_redirect: bool,
    pub locations: Vec<RenderedLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedLocation {
    pub path: String,
    pub is_def_backend: bool,
    pub upstream: RenderedUpstream,
    pub ssl_redirect: bool,
}

impl RenderedConfig {
    /// Projects `ingress` in its current order. Call
    /// [`IngressConfig::sort`] first for byte-stable output.
    pub fn from_ingress(ingress: &IngressConfig) -> Self {
        let render_raw = |locations: &[Location]| -> Vec<RenderedLocation> {
            locations
                .iter()
                .map(|l| RenderedLocation::new(l, ingress.location_ssl_redirect(l)))
                .collect()
        };

        Self {
            upstreams: ingress.upstreams.iter().map(RenderedUpstream::from).collect(),
            servers: ingress
                .servers
                .iter()
                .map(|server| RenderedServer {
                    name: server.name.clone(),
                    ssl: server.ssl,
                    ssl_certificate: server.ssl_certificate.clone(),
                    ssl_certificate_key: server.ssl_certificate_key.clone(),
                    ssl_pem_checksum: server.ssl_pem_checksum.clone(),
                    ssl_redirect: server.ssl_redirect(),
                    locations: server
                        .locations
                        .iter()
                        .map(|l| RenderedLocation::new(l, l.ssl_redirect(Some(server))))
                        .collect(),
                })
                .collect(),
            tcp_upstreams: render_raw(&ingress.tcp_upstreams),
            udp_upstreams: render_raw(&ingress.udp_upstreams),
        }
    }

    /// Number of HTTP routes that redirect to HTTPS.
    pub fn redirecting_locations(&self) -> usize {
        self.servers
            .iter()
            .flat_map(|s| &s.locations)
            .filter(|l| l.ssl_redirect)
            .count()
    }
}

impl RenderedLocation {
    fn new(location: &Location, ssl_redirect: bool) -> Self {
        Self {
            path: location.path.clone(),
            is_def_backend: location.is_def_backend,
            upstream: RenderedUpstream::from(&location.upstream),
            ssl_redirect,
        }
    }
}

impl From<&Upstream> for RenderedUpstream {
    fn from(upstream: &Upstream) -> Self {
        Self {
            name: upstream.name.clone(),
            backends: upstream.backends_or_default().into_owned(),
        }
    }
}
