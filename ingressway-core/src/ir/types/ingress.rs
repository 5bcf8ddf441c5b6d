use crate::ir::{IrError, Location, Server, ServerId, Upstream};
use serde::{Deserialize, Serialize};

/// Root aggregate handed to the renderer.
///
/// Producers append in any order. [`IngressConfig::sort`] puts every
/// collection into its canonical order before rendering.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct IngressConfig {
    #[serde(default)]
    pub upstreams: Vec<Upstream>,

    /// Virtual hosts. Indexed by [`ServerId`].
    #[serde(default)]
    pub servers: Vec<Server>,

    /// Raw TCP forwarding rules.
    #[serde(default)]
    pub tcp_upstreams: Vec<Location>,

    /// Raw UDP forwarding rules.
    #[serde(default)]
    pub udp_upstreams: Vec<Location>,
}

impl IngressConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_upstream(&mut self, upstream: Upstream) {
        self.upstreams.push(upstream);
    }

    /// First pool registered under `name`.
    pub fn upstream(&self, name: &str) -> Option<&Upstream> {
        self.upstreams.iter().find(|u| u.name == name)
    }

    /// Registers a host and returns its index. Routes already attached to
    /// the host are pointed at it.
    pub fn add_server(&mut self, mut server: Server) -> ServerId {
        let id = ServerId(self.servers.len());
        for location in &mut server.locations {
            location.server = Some(id);
        }
        self.servers.push(server);
        id
    }

    pub fn server(&self, id: ServerId) -> Option<&Server> {
        self.servers.get(id.0)
    }

    /// Appends a route to the host `id` and records the back-reference.
    pub fn add_location(&mut self, id: ServerId, mut location: Location) -> Result<(), IrError> {
        let server = self
            .servers
            .get_mut(id.0)
            .ok_or(IrError::UnknownServer { id })?;

        location.server = Some(id);
        server.locations.push(location);
        Ok(())
    }

    /// Iterates every HTTP route together with the host that owns it.
    pub fn locations(&self) -> impl Iterator<Item = (&Server, &Location)> {
        self.servers
            .iter()
            .flat_map(|server| server.locations.iter().map(move |l| (server, l)))
    }
}
