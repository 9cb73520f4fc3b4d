mod manager;
mod record;

pub use manager::{ExtensionManager, RemoveResolution, ToggleResolution, ViewPhase};
pub use record::{ManagedRecord, SyncState};
