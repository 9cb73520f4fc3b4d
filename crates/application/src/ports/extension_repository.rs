use async_trait::async_trait;
use extman_domain::{DomainError, Extension};

/// Storage seam for the extension directory.
///
/// Implementations keep records in insertion order and never reuse an id.
#[async_trait]
pub trait ExtensionRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Extension>, DomainError>;

    /// Flips `is_active` in place and returns the updated record.
    async fn toggle(&self, id: i64) -> Result<Extension, DomainError>;

    /// Removes the record and returns its id.
    async fn remove(&self, id: i64) -> Result<i64, DomainError>;
}
