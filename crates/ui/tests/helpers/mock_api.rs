#![allow(dead_code)]

use async_trait::async_trait;
use extman_domain::{Extension, Theme};
use extman_ui::{ExtensionApi, ExtensionManager, RemoveConfirmation, UiError};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

// ── MockExtensionApi ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockExtensionApi {
    extensions: Arc<Mutex<Vec<Extension>>>,
    fail_list: Arc<Mutex<bool>>,
    fail_toggle: Arc<Mutex<HashSet<i64>>>,
    fail_remove: Arc<Mutex<HashSet<i64>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockExtensionApi {
    pub fn with_extensions(extensions: Vec<Extension>) -> Self {
        let api = Self::default();
        *api.extensions.lock().unwrap() = extensions;
        api
    }

    pub fn set_fail_list(&self, fail: bool) {
        *self.fail_list.lock().unwrap() = fail;
    }

    pub fn fail_toggle_for(&self, id: i64) {
        self.fail_toggle.lock().unwrap().insert(id);
    }

    pub fn fail_remove_for(&self, id: i64) {
        self.fail_remove.lock().unwrap().insert(id);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn server_state(&self) -> Vec<Extension> {
        self.extensions.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ExtensionApi for MockExtensionApi {
    async fn list(&self) -> Result<Vec<Extension>, UiError> {
        self.record("list".to_string());
        if *self.fail_list.lock().unwrap() {
            return Err(UiError::Transport("connection refused".to_string()));
        }
        Ok(self.extensions.lock().unwrap().clone())
    }

    async fn toggle(&self, id: i64) -> Result<Extension, UiError> {
        self.record(format!("toggle {}", id));
        if self.fail_toggle.lock().unwrap().contains(&id) {
            return Err(UiError::Status {
                status: 500,
                message: "internal error".to_string(),
            });
        }
        let mut extensions = self.extensions.lock().unwrap();
        let ext = extensions
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(UiError::NotFound(id))?;
        ext.toggle();
        Ok(ext.clone())
    }

    async fn remove(&self, id: i64) -> Result<RemoveConfirmation, UiError> {
        self.record(format!("remove {}", id));
        if self.fail_remove.lock().unwrap().contains(&id) {
            return Err(UiError::Transport("connection reset".to_string()));
        }
        let mut extensions = self.extensions.lock().unwrap();
        let before = extensions.len();
        extensions.retain(|e| e.id != id);
        if extensions.len() < before {
            Ok(RemoveConfirmation {
                message: "Extension removed successfully".to_string(),
                id,
            })
        } else {
            Err(UiError::NotFound(id))
        }
    }
}

pub fn make_extension(id: i64, name: &str, is_active: bool) -> Extension {
    Extension::new(
        id,
        Arc::from(name),
        Arc::from(format!("{} helps you browse", name).as_str()),
        Arc::from(format!("./assets/images/logo-{}.svg", name.to_lowercase()).as_str()),
        is_active,
    )
}

pub fn sample_extensions() -> Vec<Extension> {
    vec![
        make_extension(1, "DevLens", true),
        make_extension(2, "StyleSpy", false),
        make_extension(3, "SpeedBoost", true),
    ]
}

pub fn ready_manager(extensions: Vec<Extension>) -> ExtensionManager {
    let mut manager = ExtensionManager::new(Theme::Dark, true);
    manager.finish_load(Ok(extensions));
    manager
}
