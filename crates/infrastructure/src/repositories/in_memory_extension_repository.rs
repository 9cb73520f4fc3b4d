use async_trait::async_trait;
use extman_application::ports::ExtensionRepository;
use extman_domain::{DomainError, Extension};
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Process-local extension store. Contents are lost on restart.
pub struct InMemoryExtensionRepository {
    extensions: RwLock<Vec<Extension>>,
}

impl InMemoryExtensionRepository {
    pub fn new(extensions: Vec<Extension>) -> Self {
        Self {
            extensions: RwLock::new(extensions),
        }
    }

    pub async fn len(&self) -> usize {
        self.extensions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.extensions.read().await.is_empty()
    }
}

#[async_trait]
impl ExtensionRepository for InMemoryExtensionRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Extension>, DomainError> {
        Ok(self.extensions.read().await.clone())
    }

    #[instrument(skip(self))]
    async fn toggle(&self, id: i64) -> Result<Extension, DomainError> {
        let mut extensions = self.extensions.write().await;
        let extension = extensions
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(DomainError::ExtensionNotFound(id))?;

        extension.toggle();
        debug!(extension_id = id, is_active = extension.is_active, "Toggled in memory");

        Ok(extension.clone())
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: i64) -> Result<i64, DomainError> {
        let mut extensions = self.extensions.write().await;
        let initial_len = extensions.len();

        extensions.retain(|e| e.id != id);

        if extensions.len() < initial_len {
            debug!(extension_id = id, remaining = extensions.len(), "Removed from memory");
            Ok(id)
        } else {
            Err(DomainError::ExtensionNotFound(id))
        }
    }
}
