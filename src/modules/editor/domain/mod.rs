pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::editor::Editor;
pub use repositories::editor_repository::EditorRepository;
