#![allow(dead_code)]

use chrono::NaiveDate;
use std::sync::Arc;

use gamestore::{
    Developer, DeveloperService, Editor, EditorService, Game, GameService,
    InMemoryDeveloperRepository, InMemoryEditorRepository, InMemoryGameRepository,
    RelationsService,
};

/// All four services wired against one shared set of in-memory stores.
pub struct Catalog {
    pub games: GameService,
    pub developers: DeveloperService,
    pub editors: EditorService,
    pub relations: RelationsService,
}

pub fn catalog() -> Catalog {
    let game_repo = Arc::new(InMemoryGameRepository::new());
    let developer_repo = Arc::new(InMemoryDeveloperRepository::new());
    let editor_repo = Arc::new(InMemoryEditorRepository::new());

    Catalog {
        games: GameService::new(game_repo.clone()),
        developers: DeveloperService::new(developer_repo.clone()),
        editors: EditorService::new(editor_repo.clone()),
        relations: RelationsService::new(game_repo, developer_repo, editor_repo),
    }
}

pub fn game(title: &str) -> Game {
    Game::new(
        title.to_string(),
        NaiveDate::from_ymd_opt(1998, 11, 19).unwrap(),
    )
}

pub fn developer(name: &str) -> Developer {
    Developer::new(name.to_string())
}

pub fn editor(name: &str) -> Editor {
    Editor::new(name.to_string())
}
