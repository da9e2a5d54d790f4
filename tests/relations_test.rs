/// Relationship linking against the in-memory stores.
///
/// Covers:
/// - Linking developers/editors to games, both directions of the view
/// - Error reporting when endpoint ids do not resolve
/// - Idempotent re-linking
/// - Owner assignment and replacement
mod utils;

use gamestore::AppError;
use utils::{catalog, developer, editor, game};
use uuid::Uuid;

#[tokio::test]
async fn link_developer_updates_the_game_and_the_inverse_view() {
    let catalog = catalog();

    let game = catalog.games.create_game(game("Half-Life")).await.unwrap();
    let studio = catalog
        .developers
        .create_developer(developer("Valve"))
        .await
        .unwrap();

    let game_id = game.id.unwrap();
    let studio_id = studio.id.unwrap();

    let updated = catalog
        .relations
        .add_developer_to_game(&game_id, &studio_id)
        .await
        .unwrap();
    assert!(updated.has_developer(&studio_id));

    let developed = catalog
        .relations
        .games_of_developer(&studio_id)
        .await
        .unwrap();
    assert_eq!(developed.len(), 1);
    assert_eq!(developed[0].id, Some(game_id));
}

#[tokio::test]
async fn link_editor_updates_the_game_and_the_inverse_view() {
    let catalog = catalog();

    let game = catalog.games.create_game(game("Half-Life")).await.unwrap();
    let publisher = catalog
        .editors
        .create_editor(editor("Sierra"))
        .await
        .unwrap();

    let game_id = game.id.unwrap();
    let publisher_id = publisher.id.unwrap();

    let updated = catalog
        .relations
        .add_editor_to_game(&game_id, &publisher_id)
        .await
        .unwrap();
    assert!(updated.has_editor(&publisher_id));

    let edited = catalog
        .relations
        .games_of_editor(&publisher_id)
        .await
        .unwrap();
    assert_eq!(edited.len(), 1);
    assert_eq!(edited[0].id, Some(game_id));
}

#[tokio::test]
async fn linking_two_unknown_ids_reports_both() {
    let catalog = catalog();
    let game_id = Uuid::new_v4();
    let developer_id = Uuid::new_v4();

    let result = catalog
        .relations
        .add_developer_to_game(&game_id, &developer_id)
        .await;

    match result {
        Err(AppError::InvalidParameter(message)) => {
            assert!(message.contains(&game_id.to_string()));
            assert!(message.contains(&developer_id.to_string()));
        }
        other => panic!("expected InvalidParameter, got {:?}", other),
    }
}

#[tokio::test]
async fn linking_reports_only_the_unknown_id_when_one_exists() {
    let catalog = catalog();
    let game = catalog.games.create_game(game("Half-Life")).await.unwrap();
    let game_id = game.id.unwrap();
    let developer_id = Uuid::new_v4();

    let result = catalog
        .relations
        .add_developer_to_game(&game_id, &developer_id)
        .await;

    match result {
        Err(AppError::InvalidParameter(message)) => {
            assert!(!message.contains(&game_id.to_string()));
            assert!(message.contains(&developer_id.to_string()));
        }
        other => panic!("expected InvalidParameter, got {:?}", other),
    }

    // The failed call must not have mutated the game.
    let reloaded = catalog.games.get_game_by_id(&game_id).await.unwrap();
    assert!(reloaded.developers.is_empty());
}

#[tokio::test]
async fn relinking_an_already_linked_pair_is_idempotent() {
    let catalog = catalog();

    let game = catalog.games.create_game(game("Half-Life")).await.unwrap();
    let studio = catalog
        .developers
        .create_developer(developer("Valve"))
        .await
        .unwrap();

    let game_id = game.id.unwrap();
    let studio_id = studio.id.unwrap();

    catalog
        .relations
        .add_developer_to_game(&game_id, &studio_id)
        .await
        .unwrap();
    let updated = catalog
        .relations
        .add_developer_to_game(&game_id, &studio_id)
        .await
        .unwrap();

    assert_eq!(updated.developers.len(), 1);
}

#[tokio::test]
async fn owner_assignment_sets_and_then_replaces_the_owner() {
    let catalog = catalog();

    let studios = catalog
        .developers
        .create_developers(vec![developer("Studio A")])
        .await
        .unwrap();
    let editors = catalog
        .editors
        .create_editors(vec![editor("BigPub"), editor("OtherPub")])
        .await
        .unwrap();

    let studio_id = studios[0].id.unwrap();
    let bigpub_id = editors[0].id.unwrap();
    let otherpub_id = editors[1].id.unwrap();

    let owned = catalog
        .relations
        .set_developer_owner(&studio_id, &bigpub_id)
        .await
        .unwrap();
    assert_eq!(owned.owner, Some(bigpub_id));

    let reassigned = catalog
        .relations
        .set_developer_owner(&studio_id, &otherpub_id)
        .await
        .unwrap();
    assert_eq!(reassigned.owner, Some(otherpub_id));

    // Only the new owner sees the studio.
    let bigpub_studios = catalog
        .relations
        .studios_of_editor(&bigpub_id)
        .await
        .unwrap();
    assert!(bigpub_studios.is_empty());

    let otherpub_studios = catalog
        .relations
        .studios_of_editor(&otherpub_id)
        .await
        .unwrap();
    assert_eq!(otherpub_studios.len(), 1);
    assert_eq!(otherpub_studios[0].id, Some(studio_id));
}

#[tokio::test]
async fn concurrent_link_calls_all_validate_and_apply() {
    let catalog = catalog();

    let games = catalog
        .games
        .create_games((0..5).map(|n| game(&format!("Game {}", n))).collect())
        .await
        .unwrap();
    let studios = catalog
        .developers
        .create_developers((0..5).map(|n| developer(&format!("Studio {}", n))).collect())
        .await
        .unwrap();

    // One link call per (game, developer) pair, polled concurrently.
    // Each call runs its existence checks and save interleaved with the
    // others; distinct games keep the outcome deterministic.
    let links = games.iter().zip(studios.iter()).map(|(game, studio)| {
        catalog
            .relations
            .add_developer_to_game(game.id.as_ref().unwrap(), studio.id.as_ref().unwrap())
    });
    let updated = futures::future::join_all(links).await;

    for (result, studio) in updated.into_iter().zip(studios.iter()) {
        let game = result.unwrap();
        assert!(game.has_developer(studio.id.as_ref().unwrap()));
    }
}

#[tokio::test]
async fn inverse_views_require_an_existing_subject() {
    let catalog = catalog();

    let result = catalog.relations.games_of_developer(&Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::EntityNotFound(_))));

    let result = catalog.relations.studios_of_editor(&Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::EntityNotFound(_))));
}
