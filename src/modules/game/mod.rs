pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::GameService;
pub use domain::{Game, GameRepository};
pub use infrastructure::persistence::InMemoryGameRepository;
