pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::EditorService;
pub use domain::{Editor, EditorRepository};
pub use infrastructure::persistence::InMemoryEditorRepository;
