use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Extension not found: {0}")]
    ExtensionNotFound(i64),

    #[error("Invalid extension id: {0}")]
    InvalidExtensionId(String),

    #[error("Failed to load seed data: {0}")]
    SeedLoad(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
