use extman_domain::{DomainError, Extension};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::ExtensionRepository;

pub struct GetExtensionsUseCase {
    repo: Arc<dyn ExtensionRepository>,
}

impl GetExtensionsUseCase {
    pub fn new(repo: Arc<dyn ExtensionRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<Extension>, DomainError> {
        let extensions = self.repo.get_all().await?;
        debug!(count = extensions.len(), "Extensions retrieved");
        Ok(extensions)
    }
}
