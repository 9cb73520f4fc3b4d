use super::Repositories;
use extman_application::use_cases::{
    GetExtensionsUseCase, RemoveExtensionUseCase, ToggleExtensionUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub get_extensions: Arc<GetExtensionsUseCase>,
    pub toggle_extension: Arc<ToggleExtensionUseCase>,
    pub remove_extension: Arc<RemoveExtensionUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            get_extensions: Arc::new(GetExtensionsUseCase::new(repos.extension.clone())),
            toggle_extension: Arc::new(ToggleExtensionUseCase::new(repos.extension.clone())),
            remove_extension: Arc::new(RemoveExtensionUseCase::new(repos.extension.clone())),
        }
    }
}
