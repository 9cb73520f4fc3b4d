use extman_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::ExtensionRepository;

pub struct RemoveExtensionUseCase {
    repo: Arc<dyn ExtensionRepository>,
}

impl RemoveExtensionUseCase {
    pub fn new(repo: Arc<dyn ExtensionRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<i64, DomainError> {
        match self.repo.remove(id).await {
            Ok(removed) => {
                info!(extension_id = removed, "Extension removed");
                Ok(removed)
            }
            Err(e @ DomainError::ExtensionNotFound(_)) => {
                warn!(extension_id = id, "Remove requested for unknown extension");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}
