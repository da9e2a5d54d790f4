use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::modules::developer::domain::{
    entities::developer::Developer, repositories::developer_repository::DeveloperRepository,
};
use crate::shared::application::{Page, PageRequest};
use crate::shared::errors::AppResult;

/// DashMap-backed developer store.
pub struct InMemoryDeveloperRepository {
    rows: DashMap<Uuid, Developer>,
}

impl InMemoryDeveloperRepository {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
        }
    }

    fn persist(&self, developer: &Developer) -> Developer {
        let mut stored = developer.clone();

        // Nameless developers are refused; the id stays unpopulated.
        if stored.name.trim().is_empty() {
            return stored;
        }

        let id = stored.id.unwrap_or_else(Uuid::new_v4);
        stored.id = Some(id);
        self.rows.insert(id, stored.clone());

        stored
    }

    fn all(&self) -> Vec<Developer> {
        self.rows.iter().map(|entry| entry.value().clone()).collect()
    }

    fn sorted(mut developers: Vec<Developer>) -> Vec<Developer> {
        developers.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        developers
    }
}

impl Default for InMemoryDeveloperRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeveloperRepository for InMemoryDeveloperRepository {
    async fn save(&self, developer: &Developer) -> AppResult<Developer> {
        Ok(self.persist(developer))
    }

    async fn save_batch(&self, developers: &[Developer]) -> AppResult<Vec<Developer>> {
        Ok(developers
            .iter()
            .map(|developer| self.persist(developer))
            .collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Developer>> {
        Ok(self.rows.get(id).map(|entry| entry.value().clone()))
    }

    async fn exists_by_id(&self, id: &Uuid) -> AppResult<bool> {
        Ok(self.rows.contains_key(id))
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.rows.remove(id);
        Ok(())
    }

    async fn find_page(&self, request: &PageRequest) -> AppResult<Page<Developer>> {
        let all = Self::sorted(self.all());
        let total_count = all.len() as u64;
        let items = all
            .into_iter()
            .skip(request.offset())
            .take(request.limit())
            .collect();

        Ok(Page::new(items, total_count, request))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Developer>> {
        Ok(Self::sorted(
            self.all()
                .into_iter()
                .filter(|developer| developer.name == name)
                .collect(),
        ))
    }

    async fn find_by_name_containing(&self, name: &str) -> AppResult<Vec<Developer>> {
        Ok(Self::sorted(
            self.all()
                .into_iter()
                .filter(|developer| developer.name.contains(name))
                .collect(),
        ))
    }

    async fn find_by_owner(&self, editor_id: &Uuid) -> AppResult<Vec<Developer>> {
        Ok(Self::sorted(
            self.all()
                .into_iter()
                .filter(|developer| developer.owner.as_ref() == Some(editor_id))
                .collect(),
        ))
    }
}
