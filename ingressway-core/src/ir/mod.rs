mod default_backend;
mod error;
pub mod order;
mod redirect;
pub mod types;


pub use default_backend::*;
pub use error::*;
pub use redirect::*;
pub use types::*;
