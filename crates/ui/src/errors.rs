use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Extension {0} not found")]
    NotFound(i64),

    #[error("Extension {0} already has a toggle in flight")]
    ToggleInFlight(i64),

    #[error("Extension {0} is not loaded")]
    UnknownRecord(i64),

    #[error("Extensions have not been loaded")]
    NotReady,
}
