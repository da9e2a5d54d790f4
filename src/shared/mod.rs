// Shared kernel used by every catalog module.

pub mod application; // Pagination and other cross-module application types
pub mod domain; // Shared value objects
pub mod errors; // Shared error types
pub mod utils; // Validation and logging helpers
