use extman_domain::{DomainError, Extension, SeedExtension};
use std::path::Path;
use tracing::{info, instrument};

/// Reads the seed file and numbers its entries 1, 2, 3... in file order.
#[instrument]
pub fn load_seed_file(path: &Path) -> Result<Vec<Extension>, DomainError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| DomainError::SeedLoad(format!("{}: {}", path.display(), e)))?;

    let extensions = parse_seed(&contents)?;

    info!(
        path = %path.display(),
        count = extensions.len(),
        "Seed data loaded"
    );

    Ok(extensions)
}

pub fn parse_seed(contents: &str) -> Result<Vec<Extension>, DomainError> {
    let seeds: Vec<SeedExtension> =
        serde_json::from_str(contents).map_err(|e| DomainError::SeedLoad(e.to_string()))?;

    for (index, seed) in seeds.iter().enumerate() {
        Extension::validate_name(&seed.name)
            .map_err(|e| DomainError::SeedLoad(format!("entry {}: {}", index, e)))?;
    }

    Ok(Extension::number_seeds(seeds))
}
