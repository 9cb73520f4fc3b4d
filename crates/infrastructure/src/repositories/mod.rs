pub mod in_memory_extension_repository;

pub use in_memory_extension_repository::InMemoryExtensionRepository;
