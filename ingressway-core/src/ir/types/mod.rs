mod ingress;
mod location;
mod server;
mod upstream;

pub use ingress::*;
pub use location::*;
pub use server::*;
pub use upstream::*;
