pub mod extensions;

pub use extensions::{GetExtensionsUseCase, RemoveExtensionUseCase, ToggleExtensionUseCase};
