mod item;
mod metrics;
mod repository;

// Publicly expose the Metrics abstraction
pub use metrics::{Metrics, MetricsPtr};

// Publicly expose the item record and its storage abstraction
pub use item::{Item, ItemChanges, NewItem};
pub use repository::{ItemRepository, ItemRepositoryPtr, StoreError};
