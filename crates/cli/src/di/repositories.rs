use extman_domain::{config::SeedConfig, DomainError};
use extman_infrastructure::{repositories::InMemoryExtensionRepository, seed::load_seed_file};
use std::path::Path;
use std::sync::Arc;

pub struct Repositories {
    pub extension: Arc<InMemoryExtensionRepository>,
}

impl Repositories {
    pub fn new(seed: &SeedConfig) -> Result<Self, DomainError> {
        let extensions = load_seed_file(Path::new(&seed.path))?;
        Ok(Self {
            extension: Arc::new(InMemoryExtensionRepository::new(extensions)),
        })
    }
}
