use std::sync::Arc;
use tracing::{info, instrument};

use crate::api::ExtensionApi;
use crate::confirm::Confirm;
use crate::state::{ExtensionManager, RemoveResolution, ToggleResolution};
use crate::UiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Cancelled,
    Completed(RemoveResolution),
}

/// Drives an `ExtensionManager` against a remote `ExtensionApi`.
pub struct ExtensionController {
    api: Arc<dyn ExtensionApi>,
    manager: ExtensionManager,
}

impl ExtensionController {
    pub fn new(api: Arc<dyn ExtensionApi>, manager: ExtensionManager) -> Self {
        Self { api, manager }
    }

    pub fn manager(&self) -> &ExtensionManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut ExtensionManager {
        &mut self.manager
    }

    /// Fetches the full list and replaces local state.
    #[instrument(skip(self))]
    pub async fn load(&mut self) {
        self.manager.begin_load();
        let result = self.api.list().await;
        self.manager.finish_load(result);
    }

    /// Errors only when the toggle is rejected locally; request failures are
    /// reported as `ToggleResolution::Reverted`.
    #[instrument(skip(self))]
    pub async fn toggle(&mut self, id: i64) -> Result<ToggleResolution, UiError> {
        self.manager.begin_toggle(id)?;
        let result = self.api.toggle(id).await;
        let resolution = self.manager.complete_toggle(id, result);
        info!(extension_id = id, ?resolution, "Toggle resolved");
        Ok(resolution)
    }

    #[instrument(skip(self, confirm))]
    pub async fn remove(
        &mut self,
        id: i64,
        confirm: &mut dyn Confirm,
    ) -> Result<RemoveOutcome, UiError> {
        let extension = self.manager.begin_remove(id)?.clone();
        if !confirm.confirm(&extension).await {
            info!(extension_id = id, "Removal cancelled");
            return Ok(RemoveOutcome::Cancelled);
        }

        let result = self.api.remove(id).await.map(|c| c.id);
        let resolution = self.manager.complete_remove(id, result);
        info!(extension_id = id, ?resolution, "Remove resolved");
        Ok(RemoveOutcome::Completed(resolution))
    }
}
