use log::{debug, info, warn};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::game::domain::{
    entities::game::Game, repositories::game_repository::GameRepository,
};
use crate::shared::application::{Page, PageRequest};
use crate::shared::domain::value_objects::SearchMode;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

pub struct GameService {
    game_repo: Arc<dyn GameRepository>,
}

impl GameService {
    pub fn new(game_repo: Arc<dyn GameRepository>) -> Self {
        Self { game_repo }
    }

    /// Get all games by page of 50 results each, in title alphabetical
    /// order. An out-of-range page is an empty page, not an error.
    pub async fn get_all_games(&self, page_number: u32) -> AppResult<Page<Game>> {
        let page = self
            .game_repo
            .find_page(&PageRequest::new(page_number))
            .await?;

        if page.is_empty() {
            warn!("No games found on the page number {}", page_number);
        }

        Ok(page)
    }

    /// Get all games with a matching title, exact or substring depending
    /// on the search mode. An empty result is valid.
    pub async fn get_games_by_title(
        &self,
        title: &str,
        mode: SearchMode,
    ) -> AppResult<Vec<Game>> {
        let games = match mode {
            SearchMode::Strict => {
                debug!("Getting games by title with strict search");
                self.game_repo.find_by_title(title).await?
            }
            SearchMode::Default => self.game_repo.find_by_title_containing(title).await?,
        };

        if games.is_empty() {
            info!("No games found with the title {}", title);
        }

        Ok(games)
    }

    /// Get the game with the matching id.
    pub async fn get_game_by_id(&self, id: &Uuid) -> AppResult<Game> {
        self.game_repo.find_by_id(id).await?.ok_or_else(|| {
            let message = format!("Cannot find a game with this id: {}", id);
            info!("{}", message);
            AppError::EntityNotFound(message)
        })
    }

    /// Pure existence check; a missing id is `Ok(false)`, never an error.
    pub async fn game_exists_by_id(&self, id: &Uuid) -> AppResult<bool> {
        self.game_repo.exists_by_id(id).await
    }

    /// Save a single validated game.
    pub async fn create_game(&self, game: Game) -> AppResult<Game> {
        Validator::validate_game_title(&game.title)?;

        debug!("Creating the game titled {}", game.title);
        let created = self.game_repo.save(&game).await?;

        if created.id.is_none() {
            let message = format!("The game titled '{}' has not been created", created.title);
            warn!("{}", message);
            return Err(AppError::EntityPersistFailure(message));
        }

        Ok(created)
    }

    /// Save a list of games in one batch call. Not atomic: games that
    /// persisted keep their rows even when others fail, and the error
    /// names every game that came back without an id.
    pub async fn create_games(&self, games: Vec<Game>) -> AppResult<Vec<Game>> {
        let saved = self.game_repo.save_batch(&games).await?;

        let failures: Vec<String> = saved
            .iter()
            .filter(|game| game.id.is_none())
            .map(|game| format!("The game titled '{}' has not been created", game.title))
            .collect();

        if !failures.is_empty() {
            let message = failures.join("; ");
            warn!("{}", message);
            return Err(AppError::EntityPersistFailure(message));
        }

        Ok(saved)
    }

    /// Delete the game with the matching id. Deleting a missing id is not
    /// an error; it just reports `false`.
    pub async fn delete_game(&self, id: &Uuid) -> AppResult<bool> {
        if !self.game_repo.exists_by_id(id).await? {
            info!("No game found with the id: {}", id);
            return Ok(false);
        }

        debug!("Deleting game with the id: {}", id);
        self.game_repo.delete(id).await?;

        Ok(true)
    }
}
