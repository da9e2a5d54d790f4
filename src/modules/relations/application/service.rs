//! Cross-entity association service.
//!
//! Every linking operation validates both endpoints before mutating
//! anything, and both existence checks always run so the error can name
//! every unresolved id at once. The check and the following load/save
//! are separate store calls: an endpoint deleted concurrently in that
//! window surfaces as `EntityNotFound` from the load, with no
//! half-applied mutation persisted by this call.

use log::{debug, info};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::developer::domain::{
    entities::developer::Developer, repositories::developer_repository::DeveloperRepository,
};
use crate::modules::editor::domain::{
    entities::editor::Editor, repositories::editor_repository::EditorRepository,
};
use crate::modules::game::domain::{
    entities::game::Game, repositories::game_repository::GameRepository,
};
use crate::shared::errors::{AppError, AppResult};

pub struct RelationsService {
    game_repo: Arc<dyn GameRepository>,
    developer_repo: Arc<dyn DeveloperRepository>,
    editor_repo: Arc<dyn EditorRepository>,
}

impl RelationsService {
    pub fn new(
        game_repo: Arc<dyn GameRepository>,
        developer_repo: Arc<dyn DeveloperRepository>,
        editor_repo: Arc<dyn EditorRepository>,
    ) -> Self {
        Self {
            game_repo,
            developer_repo,
            editor_repo,
        }
    }

    /// Link a developer to a game. Re-linking an already-linked pair is
    /// a no-op on the developer set.
    pub async fn add_developer_to_game(
        &self,
        game_id: &Uuid,
        developer_id: &Uuid,
    ) -> AppResult<Game> {
        let is_game_exist = self.game_repo.exists_by_id(game_id).await?;
        let is_developer_exist = self.developer_repo.exists_by_id(developer_id).await?;

        let mut unresolved = Vec::new();
        if !is_game_exist {
            unresolved.push(format!("Cannot find a game with this id: {}", game_id));
        }
        if !is_developer_exist {
            unresolved.push(format!(
                "Cannot find a developer with this id: {}",
                developer_id
            ));
        }
        if !unresolved.is_empty() {
            let message = unresolved.join("; ");
            info!("{}", message);
            return Err(AppError::InvalidParameter(message));
        }

        let developer = self.load_developer(developer_id).await?;
        let mut game = self.load_game(game_id).await?;
        let linked_id = persisted_id(developer.id, "developer")?;

        debug!(
            "Adding the developer {} to the game {}",
            developer.name, game.title
        );
        if !game.add_developer(linked_id) {
            debug!(
                "The developer {} is already linked to the game {}",
                developer.name, game.title
            );
        }

        self.game_repo.save(&game).await
    }

    /// Link an editor to a game; same contract as
    /// [`RelationsService::add_developer_to_game`].
    pub async fn add_editor_to_game(&self, game_id: &Uuid, editor_id: &Uuid) -> AppResult<Game> {
        let is_game_exist = self.game_repo.exists_by_id(game_id).await?;
        let is_editor_exist = self.editor_repo.exists_by_id(editor_id).await?;

        let mut unresolved = Vec::new();
        if !is_game_exist {
            unresolved.push(format!("Cannot find a game with this id: {}", game_id));
        }
        if !is_editor_exist {
            unresolved.push(format!("Cannot find an editor with this id: {}", editor_id));
        }
        if !unresolved.is_empty() {
            let message = unresolved.join("; ");
            info!("{}", message);
            return Err(AppError::InvalidParameter(message));
        }

        let editor = self.load_editor(editor_id).await?;
        let mut game = self.load_game(game_id).await?;
        let linked_id = persisted_id(editor.id, "editor")?;

        debug!("Adding the editor {} to the game {}", editor.name, game.title);
        if !game.add_editor(linked_id) {
            debug!(
                "The editor {} is already linked to the game {}",
                editor.name, game.title
            );
        }

        self.game_repo.save(&game).await
    }

    /// Assign the owning editor of a developer. Re-assigning replaces
    /// the previous owner; it never errors and never duplicates.
    pub async fn set_developer_owner(
        &self,
        developer_id: &Uuid,
        editor_id: &Uuid,
    ) -> AppResult<Developer> {
        let is_developer_exist = self.developer_repo.exists_by_id(developer_id).await?;
        let is_editor_exist = self.editor_repo.exists_by_id(editor_id).await?;

        let mut unresolved = Vec::new();
        if !is_developer_exist {
            unresolved.push(format!(
                "Cannot find a developer with this id: {}",
                developer_id
            ));
        }
        if !is_editor_exist {
            unresolved.push(format!("Cannot find an editor with this id: {}", editor_id));
        }
        if !unresolved.is_empty() {
            let message = unresolved.join("; ");
            info!("{}", message);
            return Err(AppError::InvalidParameter(message));
        }

        let editor = self.load_editor(editor_id).await?;
        let mut developer = self.load_developer(developer_id).await?;
        let owner_id = persisted_id(editor.id, "editor")?;

        debug!(
            "Adding the owner {} to the developer {}",
            editor.name, developer.name
        );
        developer.set_owner(owner_id);

        self.developer_repo.save(&developer).await
    }

    /// Games developed by a studio (inverse of `Game::developers`).
    pub async fn games_of_developer(&self, developer_id: &Uuid) -> AppResult<Vec<Game>> {
        if !self.developer_repo.exists_by_id(developer_id).await? {
            let message = format!("Cannot find a developer with this id: {}", developer_id);
            info!("{}", message);
            return Err(AppError::EntityNotFound(message));
        }

        self.game_repo.find_by_developer(developer_id).await
    }

    /// Games edited by an editor (inverse of `Game::editors`).
    pub async fn games_of_editor(&self, editor_id: &Uuid) -> AppResult<Vec<Game>> {
        if !self.editor_repo.exists_by_id(editor_id).await? {
            let message = format!("Cannot find an editor with this id: {}", editor_id);
            info!("{}", message);
            return Err(AppError::EntityNotFound(message));
        }

        self.game_repo.find_by_editor(editor_id).await
    }

    /// Studios owned by an editor (inverse of `Developer::owner`).
    pub async fn studios_of_editor(&self, editor_id: &Uuid) -> AppResult<Vec<Developer>> {
        if !self.editor_repo.exists_by_id(editor_id).await? {
            let message = format!("Cannot find an editor with this id: {}", editor_id);
            info!("{}", message);
            return Err(AppError::EntityNotFound(message));
        }

        self.developer_repo.find_by_owner(editor_id).await
    }

    async fn load_game(&self, id: &Uuid) -> AppResult<Game> {
        self.game_repo.find_by_id(id).await?.ok_or_else(|| {
            AppError::EntityNotFound(format!("Cannot find a game with this id: {}", id))
        })
    }

    async fn load_developer(&self, id: &Uuid) -> AppResult<Developer> {
        self.developer_repo.find_by_id(id).await?.ok_or_else(|| {
            AppError::EntityNotFound(format!("Cannot find a developer with this id: {}", id))
        })
    }

    async fn load_editor(&self, id: &Uuid) -> AppResult<Editor> {
        self.editor_repo.find_by_id(id).await?.ok_or_else(|| {
            AppError::EntityNotFound(format!("Cannot find an editor with this id: {}", id))
        })
    }
}

/// An entity loaded from the store must carry an id.
fn persisted_id(id: Option<Uuid>, what: &str) -> AppResult<Uuid> {
    id.ok_or_else(|| AppError::StoreError(format!("Loaded {} has no id", what)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::developer::domain::repositories::developer_repository::MockDeveloperRepository;
    use crate::modules::editor::domain::repositories::editor_repository::MockEditorRepository;
    use crate::modules::game::domain::repositories::game_repository::MockGameRepository;
    use chrono::NaiveDate;

    fn persisted_game(title: &str) -> Game {
        let mut game = Game::new(
            title.to_string(),
            NaiveDate::from_ymd_opt(2007, 10, 9).unwrap(),
        );
        game.id = Some(Uuid::new_v4());
        game
    }

    fn persisted_developer(name: &str) -> Developer {
        let mut developer = Developer::new(name.to_string());
        developer.id = Some(Uuid::new_v4());
        developer
    }

    fn service(
        game_repo: MockGameRepository,
        developer_repo: MockDeveloperRepository,
        editor_repo: MockEditorRepository,
    ) -> RelationsService {
        RelationsService::new(
            Arc::new(game_repo),
            Arc::new(developer_repo),
            Arc::new(editor_repo),
        )
    }

    #[tokio::test]
    async fn both_existence_checks_run_even_when_the_first_fails() {
        let game_id = Uuid::new_v4();
        let developer_id = Uuid::new_v4();

        let mut game_repo = MockGameRepository::new();
        game_repo
            .expect_exists_by_id()
            .times(1)
            .returning(|_| Ok(false));
        game_repo.expect_save().times(0);

        let mut developer_repo = MockDeveloperRepository::new();
        developer_repo
            .expect_exists_by_id()
            .times(1)
            .returning(|_| Ok(false));

        let service = service(game_repo, developer_repo, MockEditorRepository::new());
        let result = service.add_developer_to_game(&game_id, &developer_id).await;

        match result {
            Err(AppError::InvalidParameter(message)) => {
                assert!(message.contains(&game_id.to_string()));
                assert!(message.contains(&developer_id.to_string()));
            }
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn only_the_missing_id_is_reported() {
        let game_id = Uuid::new_v4();
        let developer_id = Uuid::new_v4();

        let mut game_repo = MockGameRepository::new();
        game_repo.expect_exists_by_id().returning(|_| Ok(true));
        game_repo.expect_save().times(0);

        let mut developer_repo = MockDeveloperRepository::new();
        developer_repo.expect_exists_by_id().returning(|_| Ok(false));

        let service = service(game_repo, developer_repo, MockEditorRepository::new());
        let result = service.add_developer_to_game(&game_id, &developer_id).await;

        match result {
            Err(AppError::InvalidParameter(message)) => {
                assert!(!message.contains(&game_id.to_string()));
                assert!(message.contains(&developer_id.to_string()));
            }
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn store_fault_on_the_final_save_propagates_unmodified() {
        let game = persisted_game("BioShock");
        let developer = persisted_developer("Studio A");
        let game_id = game.id.unwrap();
        let developer_id = developer.id.unwrap();

        let mut game_repo = MockGameRepository::new();
        game_repo.expect_exists_by_id().returning(|_| Ok(true));
        let found_game = game.clone();
        game_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(found_game.clone())));
        game_repo
            .expect_save()
            .returning(|_| Err(AppError::StoreError("disk full".to_string())));

        let mut developer_repo = MockDeveloperRepository::new();
        developer_repo.expect_exists_by_id().returning(|_| Ok(true));
        developer_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(developer.clone())));

        let service = service(game_repo, developer_repo, MockEditorRepository::new());
        let result = service.add_developer_to_game(&game_id, &developer_id).await;

        match result {
            Err(AppError::StoreError(message)) => assert_eq!(message, "disk full"),
            other => panic!("expected StoreError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn endpoint_deleted_between_check_and_load_surfaces_as_not_found() {
        let game = persisted_game("BioShock");
        let developer = persisted_developer("Studio A");
        let game_id = game.id.unwrap();
        let developer_id = developer.id.unwrap();

        let mut game_repo = MockGameRepository::new();
        game_repo.expect_exists_by_id().returning(|_| Ok(true));
        // The game vanished after the existence check.
        game_repo.expect_find_by_id().returning(|_| Ok(None));
        game_repo.expect_save().times(0);

        let mut developer_repo = MockDeveloperRepository::new();
        developer_repo.expect_exists_by_id().returning(|_| Ok(true));
        developer_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(developer.clone())));

        let service = service(game_repo, developer_repo, MockEditorRepository::new());
        let result = service.add_developer_to_game(&game_id, &developer_id).await;

        assert!(matches!(result, Err(AppError::EntityNotFound(_))));
    }
}
