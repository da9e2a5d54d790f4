use crate::modules::game::domain::entities::game::Game;
use crate::shared::application::{Page, PageRequest};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

/// Store contract for games. `save` and `save_batch` report persistence
/// failure per item by returning the entity with its id unpopulated; an
/// `Err` is reserved for store-level faults.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn save(&self, game: &Game) -> AppResult<Game>;
    async fn save_batch(&self, games: &[Game]) -> AppResult<Vec<Game>>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Game>>;
    async fn exists_by_id(&self, id: &Uuid) -> AppResult<bool>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
    /// Page of up to 50 games, ascending by title.
    async fn find_page(&self, request: &PageRequest) -> AppResult<Page<Game>>;
    async fn find_by_title(&self, title: &str) -> AppResult<Vec<Game>>;
    /// Substring match, sorted ascending by title.
    async fn find_by_title_containing(&self, title: &str) -> AppResult<Vec<Game>>;
    async fn find_by_developer(&self, developer_id: &Uuid) -> AppResult<Vec<Game>>;
    async fn find_by_editor(&self, editor_id: &Uuid) -> AppResult<Vec<Game>>;
}
