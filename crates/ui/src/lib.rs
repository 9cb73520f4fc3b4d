//! Terminal frontend for the extension directory: a rendering-independent
//! state machine, the HTTP client that feeds it, and a text renderer.
pub mod api;
pub mod command;
pub mod confirm;
pub mod controller;
pub mod errors;
pub mod render;
pub mod state;

pub use api::{ExtensionApi, HttpExtensionApi, RemoveConfirmation};
pub use command::UiCommand;
pub use confirm::{AutoConfirm, Confirm};
pub use controller::{ExtensionController, RemoveOutcome};
pub use errors::UiError;
pub use render::{render, RenderOptions};
pub use state::{
    ExtensionManager, ManagedRecord, RemoveResolution, SyncState, ToggleResolution, ViewPhase,
};
