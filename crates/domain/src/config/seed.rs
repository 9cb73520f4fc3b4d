use serde::{Deserialize, Serialize};

/// Location of the read-only JSON file the directory is populated from.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedConfig {
    #[serde(default = "default_seed_path")]
    pub path: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            path: default_seed_path(),
        }
    }
}

fn default_seed_path() -> String {
    "data/data.json".to_string()
}
