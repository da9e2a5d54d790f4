pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::DeveloperService;
pub use domain::{Developer, DeveloperRepository};
pub use infrastructure::persistence::InMemoryDeveloperRepository;
