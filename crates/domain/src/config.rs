pub mod client;
pub mod cors;
pub mod errors;
pub mod logging;
pub mod root;
pub mod seed;
pub mod server;

pub use client::ClientConfig;
pub use cors::CorsConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use seed::SeedConfig;
pub use server::ServerConfig;
