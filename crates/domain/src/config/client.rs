use serde::{Deserialize, Serialize};

use crate::Theme;

/// Settings for the terminal frontend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Base URL of the API, including the `/api` prefix.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// When false a failed remove is only logged, leaving the view untouched.
    #[serde(default = "default_true")]
    pub surface_remove_errors: bool,

    #[serde(default)]
    pub theme: Theme,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            surface_remove_errors: true,
            theme: Theme::default(),
        }
    }
}

fn default_api_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_true() -> bool {
    true
}
