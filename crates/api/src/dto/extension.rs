use extman_domain::Extension;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub logo: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl ExtensionResponse {
    pub fn from_extension(e: Extension) -> Self {
        Self {
            id: e.id,
            name: e.name.to_string(),
            description: e.description.to_string(),
            logo: e.logo.to_string(),
            is_active: e.is_active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionListResponse {
    pub extensions: Vec<ExtensionResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveExtensionResponse {
    pub message: String,
    pub id: i64,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
