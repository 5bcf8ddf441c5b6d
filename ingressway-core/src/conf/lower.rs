use crate::conf::error::ConfigError;
use crate::conf::types::{IngressSnapshot, LocationSpec};
use crate::ir::{IngressConfig, Location, Server};
use tracing::debug;

/// Builds the IR from a snapshot and puts it into canonical order.
pub fn lower_snapshot(snapshot: IngressSnapshot) -> Result<IngressConfig, ConfigError> {
    let mut ingress = IngressConfig::new();

    //-------------------------------------------------------------------------
    // Upstream pools
    //-------------------------------------------------------------------------
    for upstream in snapshot.upstreams {
        ingress.add_upstream(upstream);
    }

    //-------------------------------------------------------------------------
    // Virtual hosts
    //-------------------------------------------------------------------------
    for spec in snapshot.servers {
        let mut server = Server::new(spec.name);
        server.ssl = spec.ssl;
        server.ssl_certificate = spec.ssl_certificate;
        server.ssl_certificate_key = spec.ssl_certificate_key;
        server.ssl_pem_checksum = spec.ssl_pem_checksum;
        server.set_cfg(spec.config);

        let id = ingress.add_server(server);
        for location_spec in spec.locations {
            let location = lower_location(&ingress, location_spec)?;
            ingress.add_location(id, location)?;
        }
    }

    //-------------------------------------------------------------------------
    // Raw TCP/UDP forwarding
    //-------------------------------------------------------------------------
    for spec in snapshot.tcp_upstreams {
        let location = lower_location(&ingress, spec)?;
        ingress.tcp_upstreams.push(location);
    }

    for spec in snapshot.udp_upstreams {
        let location = lower_location(&ingress, spec)?;
        ingress.udp_upstreams.push(location);
    }

    ingress.sort();

    debug!(
        servers = ingress.servers.len(),
        locations = ingress.locations().count(),
        "lowered ingress snapshot"
    );

    Ok(ingress)
}

fn lower_location(ingress: &IngressConfig, spec: LocationSpec) -> Result<Location, ConfigError> {
    let Some(upstream) = ingress.upstream(&spec.upstream) else {
        return Err(ConfigError::UnknownUpstream {
            location: spec.path,
            upstream: spec.upstream,
        });
    };

    Ok(Location {
        path: spec.path,
        is_def_backend: spec.is_def_backend,
        upstream: upstream.clone(),
        annotations: spec.annotations,
        server: None,
    })
}
