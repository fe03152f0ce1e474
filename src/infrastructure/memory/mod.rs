// src/infrastructure/memory/mod.rs
mod memory_repository;

#[cfg(test)]
mod tests;

pub use memory_repository::InMemoryRepository;
use std::sync::Arc;

/// Creates an empty in-memory item repository.
///
/// Contents live for as long as the returned pointer (and its clones) do;
/// nothing is persisted across restarts.
pub fn create() -> anyhow::Result<crate::domain::ItemRepositoryPtr> {
    tracing::info!("Initializing in-memory item repository");
    Ok(Arc::new(InMemoryRepository::new()))
}
