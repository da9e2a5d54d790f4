use crate::modules::editor::domain::entities::editor::Editor;
use crate::shared::application::{Page, PageRequest};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EditorRepository: Send + Sync {
    async fn save(&self, editor: &Editor) -> AppResult<Editor>;
    async fn save_batch(&self, editors: &[Editor]) -> AppResult<Vec<Editor>>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Editor>>;
    async fn exists_by_id(&self, id: &Uuid) -> AppResult<bool>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
    /// Page of up to 50 editors, ascending by name.
    async fn find_page(&self, request: &PageRequest) -> AppResult<Page<Editor>>;
    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Editor>>;
    /// Substring match, sorted ascending by name.
    async fn find_by_name_containing(&self, name: &str) -> AppResult<Vec<Editor>>;
}
