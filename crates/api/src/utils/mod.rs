pub mod path_id;

pub use path_id::parse_path_id;
