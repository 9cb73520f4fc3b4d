mod loader;

pub use loader::{load_seed_file, parse_seed};
