// Gateway module - controls public API for handlers
// Modules are private, only exported symbols are public

mod fallback;
mod health;
mod items;
mod metrics;
mod shared_types;

// Core handlers
pub use health::health_check;
pub use metrics::metrics_handler;

// Fallbacks
pub use fallback::{method_not_allowed_handler, not_found_handler};

// Item CRUD handlers
pub use items::{create_item, delete_item, get_item, list_items, update_item};

// Error plumbing shared with the middleware
pub(crate) use shared_types::{internal_error_response, Fault};
