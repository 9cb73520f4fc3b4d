#![allow(dead_code)]

use async_trait::async_trait;
use extman_application::ports::ExtensionRepository;
use extman_domain::{DomainError, Extension};
use std::sync::Arc;
use tokio::sync::RwLock;

// ── MockExtensionRepository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockExtensionRepository {
    extensions: Arc<RwLock<Vec<Extension>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockExtensionRepository {
    pub fn new() -> Self {
        Self {
            extensions: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub fn with_extensions(extensions: Vec<Extension>) -> Self {
        Self {
            extensions: Arc::new(RwLock::new(extensions)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn count(&self) -> usize {
        self.extensions.read().await.len()
    }

    pub async fn snapshot(&self) -> Vec<Extension> {
        self.extensions.read().await.clone()
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::Storage("mock storage failure".to_string()));
        }
        Ok(())
    }
}

impl Default for MockExtensionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExtensionRepository for MockExtensionRepository {
    async fn get_all(&self) -> Result<Vec<Extension>, DomainError> {
        self.check_failure().await?;
        Ok(self.extensions.read().await.clone())
    }

    async fn toggle(&self, id: i64) -> Result<Extension, DomainError> {
        self.check_failure().await?;
        let mut extensions = self.extensions.write().await;
        let ext = extensions
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(DomainError::ExtensionNotFound(id))?;
        ext.toggle();
        Ok(ext.clone())
    }

    async fn remove(&self, id: i64) -> Result<i64, DomainError> {
        self.check_failure().await?;
        let mut extensions = self.extensions.write().await;
        let before = extensions.len();
        extensions.retain(|e| e.id != id);
        if extensions.len() < before {
            Ok(id)
        } else {
            Err(DomainError::ExtensionNotFound(id))
        }
    }
}

pub fn make_extension(id: i64, name: &str, is_active: bool) -> Extension {
    Extension::new(
        id,
        Arc::from(name),
        Arc::from(format!("{} description", name).as_str()),
        Arc::from(format!("./assets/images/logo-{}.svg", name.to_lowercase()).as_str()),
        is_active,
    )
}
