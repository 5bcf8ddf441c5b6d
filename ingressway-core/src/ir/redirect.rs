use crate::ir::{IngressConfig, Location, Server};

/// Route annotation overriding the host's redirect policy.
pub const SSL_REDIRECT_ANNOTATION: &str = "ssl-redirect";

impl Server {
    /// Whether plain HTTP requests to this host are redirected to HTTPS.
    pub fn ssl_redirect(&self) -> bool {
        // no TLS listener to redirect to
        if !self.ssl {
            return false;
        }

        self.cfg().ssl_redirect.unwrap_or(false)
    }
}

impl Location {
    /// Whether plain HTTP requests matching this route are redirected to
    /// HTTPS.
    ///
    /// The `ssl-redirect` annotation wins over the host policy, but only the
    /// literal `true` (any case) enables it. Without the annotation the
    /// route inherits from `owner`.
    pub fn ssl_redirect(&self, owner: Option<&Server>) -> bool {
        let Some(server) = owner.filter(|s| s.ssl) else {
            return false;
        };

        match self.annotations.get(SSL_REDIRECT_ANNOTATION) {
            Some(value) => value.eq_ignore_ascii_case("true"),
            None => server.ssl_redirect(),
        }
    }
}

impl IngressConfig {
    /// Resolves a route's redirect policy through its back-reference.
    pub fn location_ssl_redirect(&self, location: &Location) -> bool {
        location.ssl_redirect(location.server.and_then(|id| self.server(id)))
    }
}
