mod memory;
pub mod metrics;

// Re-export the factory functions for easy access
pub use memory::create as create_memory_repository;
pub use metrics::{create_noop_metrics, create_prom_metrics};
