mod extension_repository;

pub use extension_repository::ExtensionRepository;
