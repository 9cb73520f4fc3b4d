use extman_application::use_cases::{
    GetExtensionsUseCase, RemoveExtensionUseCase, ToggleExtensionUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_extensions: Arc<GetExtensionsUseCase>,
    pub toggle_extension: Arc<ToggleExtensionUseCase>,
    pub remove_extension: Arc<RemoveExtensionUseCase>,
}
