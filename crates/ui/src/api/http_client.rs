use async_trait::async_trait;
use extman_domain::Extension;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

use super::{ExtensionApi, RemoveConfirmation};
use crate::UiError;

#[derive(Deserialize)]
struct ListBody {
    extensions: Vec<Extension>,
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

/// `ExtensionApi` over HTTP/JSON.
pub struct HttpExtensionApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpExtensionApi {
    /// `base_url` is the API root, e.g. `http://localhost:5000/api`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, UiError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("extman/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| UiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        id: Option<i64>,
    ) -> Result<T, UiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "Sending request");

        let response = self
            .client
            .request(method, &url)
            .send()
            .await
            .map_err(|e| UiError::Transport(format!("{}: {}", url, e)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| UiError::Transport(format!("read error for {}: {}", url, e)))?;

        if !status.is_success() {
            return Err(status_error(status, &body, id));
        }

        serde_json::from_slice(&body)
            .map_err(|e| UiError::Transport(format!("invalid response from {}: {}", url, e)))
    }
}

fn status_error(status: StatusCode, body: &[u8], id: Option<i64>) -> UiError {
    if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
        return UiError::NotFound(id);
    }

    let message = serde_json::from_slice::<MessageBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        });

    UiError::Status {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl ExtensionApi for HttpExtensionApi {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Extension>, UiError> {
        let body: ListBody = self.send(Method::GET, "/extensions", None).await?;
        Ok(body.extensions)
    }

    #[instrument(skip(self))]
    async fn toggle(&self, id: i64) -> Result<Extension, UiError> {
        self.send(Method::PATCH, &format!("/extensions/{}/toggle", id), Some(id))
            .await
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: i64) -> Result<RemoveConfirmation, UiError> {
        self.send(Method::DELETE, &format!("/extensions/{}", id), Some(id))
            .await
    }
}
