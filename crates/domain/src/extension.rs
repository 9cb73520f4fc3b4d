use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A browser extension as held by the directory.
///
/// `id` is assigned when the seed data is loaded and never changes or gets
/// reused for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    pub id: i64,
    pub name: Arc<str>,
    #[serde(default = "empty_str")]
    pub description: Arc<str>,
    #[serde(default = "empty_str")]
    pub logo: Arc<str>,
    #[serde(default)]
    pub is_active: bool,
}

/// One entry of the seed file: an extension before it has been given an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedExtension {
    pub name: Arc<str>,
    #[serde(default = "empty_str")]
    pub description: Arc<str>,
    #[serde(default = "empty_str")]
    pub logo: Arc<str>,
    #[serde(default)]
    pub is_active: bool,
}

fn empty_str() -> Arc<str> {
    Arc::from("")
}

impl Extension {
    pub fn new(
        id: i64,
        name: Arc<str>,
        description: Arc<str>,
        logo: Arc<str>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            name,
            description,
            logo,
            is_active,
        }
    }

    pub fn from_seed(id: i64, seed: SeedExtension) -> Self {
        Self {
            id,
            name: seed.name,
            description: seed.description,
            logo: seed.logo,
            is_active: seed.is_active,
        }
    }

    /// Assigns sequential ids starting at 1, in seed order.
    pub fn number_seeds(seeds: Vec<SeedExtension>) -> Vec<Self> {
        seeds
            .into_iter()
            .zip(1..)
            .map(|(seed, id)| Self::from_seed(id, seed))
            .collect()
    }

    pub fn toggle(&mut self) {
        self.is_active = !self.is_active;
    }

    pub fn status_str(&self) -> &'static str {
        if self.is_active {
            "active"
        } else {
            "inactive"
        }
    }

    pub fn validate_name(name: &str) -> Result<(), String> {
        if name.trim().is_empty() {
            return Err("Extension name cannot be empty".to_string());
        }
        Ok(())
    }

    /// Path ids must be plain decimal integers. Anything else is a client
    /// error, never a silent miss.
    pub fn parse_id(raw: &str) -> Result<i64, String> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("'{}' is not a numeric extension id", raw));
        }
        raw.parse::<i64>()
            .map_err(|_| format!("'{}' is out of range for an extension id", raw))
    }
}
