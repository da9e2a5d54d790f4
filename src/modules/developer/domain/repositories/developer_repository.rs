use crate::modules::developer::domain::entities::developer::Developer;
use crate::shared::application::{Page, PageRequest};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeveloperRepository: Send + Sync {
    async fn save(&self, developer: &Developer) -> AppResult<Developer>;
    async fn save_batch(&self, developers: &[Developer]) -> AppResult<Vec<Developer>>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Developer>>;
    async fn exists_by_id(&self, id: &Uuid) -> AppResult<bool>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
    /// Page of up to 50 developers, ascending by name.
    async fn find_page(&self, request: &PageRequest) -> AppResult<Page<Developer>>;
    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Developer>>;
    /// Substring match, sorted ascending by name.
    async fn find_by_name_containing(&self, name: &str) -> AppResult<Vec<Developer>>;
    /// Studios owned by an editor (inverse of `Developer::owner`).
    async fn find_by_owner(&self, editor_id: &Uuid) -> AppResult<Vec<Developer>>;
}
