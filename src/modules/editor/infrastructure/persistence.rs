use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::modules::editor::domain::{
    entities::editor::Editor, repositories::editor_repository::EditorRepository,
};
use crate::shared::application::{Page, PageRequest};
use crate::shared::errors::AppResult;

/// DashMap-backed editor store.
pub struct InMemoryEditorRepository {
    rows: DashMap<Uuid, Editor>,
}

impl InMemoryEditorRepository {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
        }
    }

    fn persist(&self, editor: &Editor) -> Editor {
        let mut stored = editor.clone();

        // Nameless editors are refused; the id stays unpopulated.
        if stored.name.trim().is_empty() {
            return stored;
        }

        let id = stored.id.unwrap_or_else(Uuid::new_v4);
        stored.id = Some(id);
        self.rows.insert(id, stored.clone());

        stored
    }

    fn all(&self) -> Vec<Editor> {
        self.rows.iter().map(|entry| entry.value().clone()).collect()
    }

    fn sorted(mut editors: Vec<Editor>) -> Vec<Editor> {
        editors.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        editors
    }
}

impl Default for InMemoryEditorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EditorRepository for InMemoryEditorRepository {
    async fn save(&self, editor: &Editor) -> AppResult<Editor> {
        Ok(self.persist(editor))
    }

    async fn save_batch(&self, editors: &[Editor]) -> AppResult<Vec<Editor>> {
        Ok(editors.iter().map(|editor| self.persist(editor)).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Editor>> {
        Ok(self.rows.get(id).map(|entry| entry.value().clone()))
    }

    async fn exists_by_id(&self, id: &Uuid) -> AppResult<bool> {
        Ok(self.rows.contains_key(id))
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.rows.remove(id);
        Ok(())
    }

    async fn find_page(&self, request: &PageRequest) -> AppResult<Page<Editor>> {
        let all = Self::sorted(self.all());
        let total_count = all.len() as u64;
        let items = all
            .into_iter()
            .skip(request.offset())
            .take(request.limit())
            .collect();

        Ok(Page::new(items, total_count, request))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Editor>> {
        Ok(Self::sorted(
            self.all()
                .into_iter()
                .filter(|editor| editor.name == name)
                .collect(),
        ))
    }

    async fn find_by_name_containing(&self, name: &str) -> AppResult<Vec<Editor>> {
        Ok(Self::sorted(
            self.all()
                .into_iter()
                .filter(|editor| editor.name.contains(name))
                .collect(),
        ))
    }
}
