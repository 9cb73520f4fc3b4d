mod mock_api;

pub use mock_api::*;
