pub mod extension;

pub use extension::{
    ExtensionListResponse, ExtensionResponse, MessageResponse, RemoveExtensionResponse,
};
