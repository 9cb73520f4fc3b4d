use extman_domain::{DomainError, Extension};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::ExtensionRepository;

pub struct ToggleExtensionUseCase {
    repo: Arc<dyn ExtensionRepository>,
}

impl ToggleExtensionUseCase {
    pub fn new(repo: Arc<dyn ExtensionRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<Extension, DomainError> {
        match self.repo.toggle(id).await {
            Ok(updated) => {
                info!(
                    extension_id = id,
                    name = %updated.name,
                    status = updated.status_str(),
                    "Extension toggled"
                );
                Ok(updated)
            }
            Err(e @ DomainError::ExtensionNotFound(_)) => {
                warn!(extension_id = id, "Toggle requested for unknown extension");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}
