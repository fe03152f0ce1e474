use super::item::{Item, ItemChanges, NewItem};
use std::sync::Arc;
use thiserror::Error;

/// Failures a repository can report back to the handler layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The referenced id is not present.
    #[error("item {0} not found")]
    NotFound(u64),

    /// A required field is missing or empty.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Abstraction over item storage.
///
/// Implementations own id generation: ids are assigned on `create`, are
/// strictly increasing and are never reused after `delete`.
pub trait ItemRepository: Send + Sync {
    // ---
    /// All items currently stored, ordered by ascending id.
    fn list(&self) -> Vec<Item>;

    /// Look up an item by id.
    fn get(&self, id: u64) -> Result<Item, StoreError>;

    /// Store a new item and return a copy of it.
    fn create(&self, new_item: NewItem) -> Result<Item, StoreError>;

    /// Apply a partial update; fields left as `None` keep their value.
    fn update(&self, id: u64, changes: ItemChanges) -> Result<Item, StoreError>;

    /// Remove an item by id.
    fn delete(&self, id: u64) -> Result<(), StoreError>;
}

/// Type alias for any backend that implements ItemRepository.
pub type ItemRepositoryPtr = Arc<dyn ItemRepository>;
