use crate::ir::{Upstream, UpstreamServer};
use std::borrow::Cow;

/// Local sink that answers every request with 503.
pub const DEFAULT_BACKEND_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_BACKEND_PORT: &str = "8181";

/// Backend used when no route matches or a pool has no live members.
pub fn default_backend() -> UpstreamServer {
    UpstreamServer::new(DEFAULT_BACKEND_ADDRESS, DEFAULT_BACKEND_PORT)
}

impl Upstream {
    /// The pool's backends, or the default backend alone when the pool is empty.
    pub fn backends_or_default(&self) -> Cow<'_, [UpstreamServer]> {
        if self.backends.is_empty() {
            Cow::Owned(vec![default_backend()])
        } else {
            Cow::Borrowed(&self.backends)
        }
    }
}
