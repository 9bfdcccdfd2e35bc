pub mod bench;

pub use bench::{load_config, BenchToolConfig};
