use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::modules::game::domain::{
    entities::game::Game, repositories::game_repository::GameRepository,
};
use crate::shared::application::{Page, PageRequest};
use crate::shared::errors::AppResult;

/// DashMap-backed game store. Rows are cloned in and out; sorting is by
/// (title, id) so repeated reads of unchanged data page identically.
pub struct InMemoryGameRepository {
    rows: DashMap<Uuid, Game>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
        }
    }

    fn persist(&self, game: &Game) -> Game {
        let mut stored = game.clone();

        // A game without a title is refused: the entity is handed back
        // with its id still unpopulated, which is how callers detect a
        // failed persist.
        if stored.title.trim().is_empty() {
            return stored;
        }

        let id = stored.id.unwrap_or_else(Uuid::new_v4);
        stored.id = Some(id);
        self.rows.insert(id, stored.clone());

        stored
    }

    fn all(&self) -> Vec<Game> {
        self.rows.iter().map(|entry| entry.value().clone()).collect()
    }

    fn sorted(mut games: Vec<Game>) -> Vec<Game> {
        games.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        games
    }
}

impl Default for InMemoryGameRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn save(&self, game: &Game) -> AppResult<Game> {
        Ok(self.persist(game))
    }

    async fn save_batch(&self, games: &[Game]) -> AppResult<Vec<Game>> {
        // Each item succeeds or fails on its own; there is no rollback.
        Ok(games.iter().map(|game| self.persist(game)).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Game>> {
        Ok(self.rows.get(id).map(|entry| entry.value().clone()))
    }

    async fn exists_by_id(&self, id: &Uuid) -> AppResult<bool> {
        Ok(self.rows.contains_key(id))
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.rows.remove(id);
        Ok(())
    }

    async fn find_page(&self, request: &PageRequest) -> AppResult<Page<Game>> {
        let all = Self::sorted(self.all());
        let total_count = all.len() as u64;
        let items = all
            .into_iter()
            .skip(request.offset())
            .take(request.limit())
            .collect();

        Ok(Page::new(items, total_count, request))
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Vec<Game>> {
        Ok(Self::sorted(
            self.all()
                .into_iter()
                .filter(|game| game.title == title)
                .collect(),
        ))
    }

    async fn find_by_title_containing(&self, title: &str) -> AppResult<Vec<Game>> {
        Ok(Self::sorted(
            self.all()
                .into_iter()
                .filter(|game| game.title.contains(title))
                .collect(),
        ))
    }

    async fn find_by_developer(&self, developer_id: &Uuid) -> AppResult<Vec<Game>> {
        Ok(Self::sorted(
            self.all()
                .into_iter()
                .filter(|game| game.developers.contains(developer_id))
                .collect(),
        ))
    }

    async fn find_by_editor(&self, editor_id: &Uuid) -> AppResult<Vec<Game>> {
        Ok(Self::sorted(
            self.all()
                .into_iter()
                .filter(|game| game.editors.contains(editor_id))
                .collect(),
        ))
    }
}
