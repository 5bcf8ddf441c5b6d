mod fixtures;
pub mod tracing;

pub use fixtures::{fixture_path, load_fixture};
pub use tracing::{CapturedEvent, init_test_tracing};
