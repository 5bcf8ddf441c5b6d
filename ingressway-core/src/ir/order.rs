//! Canonical ordering of the IR collections.
//!
//! Regenerated proxy configuration has to be byte-stable, otherwise every
//! discovery update would reload the proxy. All relations are plain
//! comparison functions usable with `slice::sort_by`.

use crate::ir::{IngressConfig, Location, Server, ServerId, Upstream, UpstreamServer};
use std::cmp::Ordering;
use std::mem;
use tracing::debug;

/// Upstream pools by name, ascending.
pub fn upstream_by_name(a: &Upstream, b: &Upstream) -> Ordering {
    a.name.cmp(&b.name)
}

/// Backends by address, then port. Both compared as strings.
pub fn upstream_server_by_addr_port(a: &UpstreamServer, b: &UpstreamServer) -> Ordering {
    a.address
        .cmp(&b.address)
        .then_with(|| a.port.cmp(&b.port))
}

/// Virtual hosts by name, ascending.
pub fn server_by_name(a: &Server, b: &Server) -> Ordering {
    a.name.cmp(&b.name)
}

/// Routes by path, descending. `/` ends up last.
///
/// This is a plain reversed string comparison, not a specificity order:
/// `/zz` sorts before `/a/b/c`.
pub fn location_by_path(a: &Location, b: &Location) -> Ordering {
    b.path.cmp(&a.path)
}

impl Upstream {
    pub fn sort_backends(&mut self) {
        self.backends.sort_by(upstream_server_by_addr_port);
    }
}

impl IngressConfig {
    /// Puts every collection into canonical order.
    ///
    /// Sorting is stable, so entries that compare equal keep the order the
    /// producer gave them.
    pub fn sort(&mut self) {
        self.upstreams.sort_by(upstream_by_name);
        for upstream in &mut self.upstreams {
            upstream.sort_backends();
        }

        self.sort_servers();
        for server in &mut self.servers {
            sort_locations(&mut server.locations);
        }

        sort_locations(&mut self.tcp_upstreams);
        sort_locations(&mut self.udp_upstreams);

        debug!(
            upstreams = self.upstreams.len(),
            servers = self.servers.len(),
            tcp_upstreams = self.tcp_upstreams.len(),
            udp_upstreams = self.udp_upstreams.len(),
            "sorted ingress configuration"
        );
    }

    /// Whether [`IngressConfig::sort`] would leave the config unchanged.
    pub fn is_sorted(&self) -> bool {
        let locations_sorted = |locations: &[Location]| {
            locations.is_sorted_by(|a, b| location_by_path(a, b).is_le())
                && locations.iter().all(|l| backends_sorted(&l.upstream))
        };

        self.upstreams
            .is_sorted_by(|a, b| upstream_by_name(a, b).is_le())
            && self.upstreams.iter().all(backends_sorted)
            && self.servers.is_sorted_by(|a, b| server_by_name(a, b).is_le())
            && self.servers.iter().all(|s| locations_sorted(&s.locations))
            && self.locations_linked()
            && locations_sorted(&self.tcp_upstreams)
            && locations_sorted(&self.udp_upstreams)
    }

    // Hosts live in an arena addressed by position. Every HTTP route is
    // re-pointed at the host that holds it, whatever index it carried before.
    fn sort_servers(&mut self) {
        let mut indexed: Vec<(usize, Server)> =
            mem::take(&mut self.servers).into_iter().enumerate().collect();
        indexed.sort_by(|(_, a), (_, b)| server_by_name(a, b));

        let mut remap = vec![0; indexed.len()];
        for (new, (old, _)) in indexed.iter().enumerate() {
            remap[*old] = new;
        }

        self.servers = indexed.into_iter().map(|(_, server)| server).collect();
        self.link_locations();

        let raw = self
            .tcp_upstreams
            .iter_mut()
            .chain(self.udp_upstreams.iter_mut());

        for location in raw {
            if let Some(ServerId(old)) = location.server {
                location.server = remap.get(old).map(|&new| ServerId(new));
            }
        }
    }

    fn locations_linked(&self) -> bool {
        self.servers.iter().enumerate().all(|(idx, server)| {
            server
                .locations
                .iter()
                .all(|l| l.server == Some(ServerId(idx)))
        })
    }

    /// Points every HTTP route at the host that owns it.
    pub fn link_locations(&mut self) {
        for (idx, server) in self.servers.iter_mut().enumerate() {
            for location in &mut server.locations {
                location.server = Some(ServerId(idx));
            }
        }
    }
}

fn sort_locations(locations: &mut [Location]) {
    locations.sort_by(location_by_path);
    for location in locations {
        location.upstream.sort_backends();
    }
}

fn backends_sorted(upstream: &Upstream) -> bool {
    upstream
        .backends
        .is_sorted_by(|a, b| upstream_server_by_addr_port(a, b).is_le())
}
