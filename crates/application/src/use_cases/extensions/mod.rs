mod get_extensions;
mod remove_extension;
mod toggle_extension;

pub use get_extensions::GetExtensionsUseCase;
pub use remove_extension::RemoveExtensionUseCase;
pub use toggle_extension::ToggleExtensionUseCase;
