mod interactive;
mod oneshot;
mod prompt;

pub use interactive::run_interactive;
pub use oneshot::{list, remove, toggle};

use extman_domain::config::ClientConfig;
use extman_ui::{ExtensionController, ExtensionManager, HttpExtensionApi};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

fn connect(config: &ClientConfig) -> anyhow::Result<ExtensionController> {
    let api = HttpExtensionApi::new(&config.api_url, Duration::from_secs(config.timeout_secs))?;
    debug!(api_url = api.base_url(), "Connecting to extension directory");
    let manager = ExtensionManager::new(config.theme, config.surface_remove_errors);
    Ok(ExtensionController::new(Arc::new(api), manager))
}
