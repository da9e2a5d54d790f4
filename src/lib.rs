//! Catalog of games, developers and editors, plus the service layer that
//! links them together and answers paged or by-name queries.

pub mod modules;
pub mod shared;

pub use modules::developer::{Developer, DeveloperService, InMemoryDeveloperRepository};
pub use modules::editor::{Editor, EditorService, InMemoryEditorRepository};
pub use modules::game::{Game, GameService, InMemoryGameRepository};
pub use modules::relations::RelationsService;
pub use shared::application::{Page, PageRequest, PAGE_SIZE};
pub use shared::domain::value_objects::SearchMode;
pub use shared::errors::{AppError, AppResult};
