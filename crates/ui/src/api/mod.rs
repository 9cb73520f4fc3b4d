mod http_client;

pub use http_client::HttpExtensionApi;

use async_trait::async_trait;
use extman_domain::Extension;
use serde::{Deserialize, Serialize};

use crate::UiError;

/// Server acknowledgement of a removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveConfirmation {
    pub message: String,
    pub id: i64,
}

/// Remote side of the directory as seen by the frontend.
#[async_trait]
pub trait ExtensionApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Extension>, UiError>;

    async fn toggle(&self, id: i64) -> Result<Extension, UiError>;

    async fn remove(&self, id: i64) -> Result<RemoveConfirmation, UiError>;
}
