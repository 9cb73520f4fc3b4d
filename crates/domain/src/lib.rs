//! Extension Manager Domain Layer
pub mod config;
pub mod errors;
pub mod extension;
pub mod extension_filter;
pub mod theme;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use extension::{Extension, SeedExtension};
pub use extension_filter::ExtensionFilter;
pub use theme::Theme;
