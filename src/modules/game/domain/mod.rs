pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::game::Game;
pub use repositories::game_repository::GameRepository;
