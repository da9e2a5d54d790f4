pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::developer::Developer;
pub use repositories::developer_repository::DeveloperRepository;
