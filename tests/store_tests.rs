//! Record store behavior against a real SQLite database.

use fighterdb::db::Store;
use fighterdb::models::fighter::{FighterPatch, NewFighter};
use fighterdb::services::seed::DEFAULT_ROSTER;
use fighterdb::services::{FighterError, FighterService, SeaOrmFighterService, seed_fighters};
use std::sync::Arc;

async fn memory_service() -> SeaOrmFighterService {
    let store = Store::new("sqlite::memory:")
        .await
        .expect("failed to open in-memory store");
    SeaOrmFighterService::new(store)
}

fn temp_db_url() -> (String, std::path::PathBuf) {
    let db_path =
        std::env::temp_dir().join(format!("fighterdb-store-test-{}.db", uuid::Uuid::new_v4()));
    (format!("sqlite:{}", db_path.display()), db_path)
}

#[tokio::test]
async fn insert_then_get_returns_record() {
    let service = memory_service().await;

    let first = service
        .create(NewFighter::new("RYU", "Japan").with_special_move("Hadouken"))
        .await
        .unwrap();
    let second = service.create(NewFighter::new("KEN", "USA")).await.unwrap();
    assert_ne!(first, second);

    let ryu = service.get(first).await.unwrap();
    assert_eq!(ryu.name, "RYU");
    assert_eq!(ryu.origin, "Japan");
    assert_eq!(ryu.special_move.as_deref(), Some("Hadouken"));

    let ken = service.get(second).await.unwrap();
    assert_eq!(ken.special_move, None);
}

#[tokio::test]
async fn update_overwrites_only_supplied_fields() {
    let service = memory_service().await;
    let id = service
        .create(NewFighter::new("CHUN-LI", "China").with_special_move("Spinning Bird Kick"))
        .await
        .unwrap();

    let updated = service
        .update(
            id,
            FighterPatch {
                special_move: Some(Some("Kikoken".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "CHUN-LI");
    assert_eq!(updated.origin, "China");
    assert_eq!(updated.special_move.as_deref(), Some("Kikoken"));
    assert_eq!(service.get(id).await.unwrap(), updated);
}

#[tokio::test]
async fn empty_patch_returns_record_unchanged() {
    let service = memory_service().await;
    let id = service.create(NewFighter::new("ZEKU", "Japan")).await.unwrap();

    let fighter = service.update(id, FighterPatch::default()).await.unwrap();
    assert_eq!(fighter.name, "ZEKU");
}

#[tokio::test]
async fn missing_ids_are_not_found() {
    let service = memory_service().await;

    assert!(matches!(service.get(42).await, Err(FighterError::NotFound(42))));
    assert!(matches!(
        service.update(42, FighterPatch::default()).await,
        Err(FighterError::NotFound(42))
    ));
    assert!(matches!(
        service
            .update(
                42,
                FighterPatch {
                    name: Some("X".to_string()),
                    ..Default::default()
                }
            )
            .await,
        Err(FighterError::NotFound(42))
    ));
    assert!(matches!(service.delete(42).await, Err(FighterError::NotFound(42))));
}

#[tokio::test]
async fn unknown_id_wins_over_invalid_patch() {
    let service = memory_service().await;

    let result = service
        .update(
            999,
            FighterPatch {
                name: Some(String::new()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(FighterError::NotFound(999))));

    let id = service.create(NewFighter::new("KEN", "USA")).await.unwrap();
    let result = service
        .update(
            id,
            FighterPatch {
                name: Some(String::new()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(FighterError::Validation(_))));
}

#[tokio::test]
async fn explicit_none_clears_special_move() {
    let service = memory_service().await;
    let id = service
        .create(NewFighter::new("JURI", "South Korea").with_special_move("Feng Shui Engine"))
        .await
        .unwrap();

    let updated = service
        .update(
            id,
            FighterPatch {
                special_move: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.special_move, None);
    assert_eq!(updated.name, "JURI");
    assert_eq!(service.get(id).await.unwrap().special_move, None);
}

#[tokio::test]
async fn delete_removes_record_and_ids_are_not_reused() {
    let service = memory_service().await;

    let first = service.create(NewFighter::new("RYU", "Japan")).await.unwrap();
    let last = service.create(NewFighter::new("KEN", "USA")).await.unwrap();

    service.delete(last).await.unwrap();
    assert!(matches!(service.get(last).await, Err(FighterError::NotFound(_))));

    let next = service.create(NewFighter::new("JAMIE", "Hong Kong")).await.unwrap();
    assert!(next > last);
    assert!(next > first);
}

#[tokio::test]
async fn list_tracks_inserts_minus_deletes_in_id_order() {
    let service = memory_service().await;

    let ids = service
        .create_many(vec![
            NewFighter::new("RYU", "Japan"),
            NewFighter::new("KEN", "USA"),
            NewFighter::new("JURI", "South Korea"),
        ])
        .await
        .unwrap();
    assert_eq!(ids.len(), 3);
    service.create(NewFighter::new("ZEKU", "Japan")).await.unwrap();
    service.delete(ids[1]).await.unwrap();

    let names: Vec<String> = service
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, vec!["RYU", "JURI", "ZEKU"]);
    assert_eq!(service.count().await.unwrap(), 3);
}

#[tokio::test]
async fn bulk_insert_is_all_or_nothing() {
    let service = memory_service().await;

    let result = service
        .create_many(vec![
            NewFighter::new("RYU", "Japan"),
            NewFighter::new("KEN", " "),
        ])
        .await;

    match result {
        Err(FighterError::Validation(msg)) => assert!(msg.starts_with("item 1")),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn concurrent_updates_to_different_fields_are_both_kept() {
    let service = Arc::new(memory_service().await);
    let id = service.create(NewFighter::new("RYU", "Japan")).await.unwrap();

    let renamer = {
        let service = service.clone();
        tokio::spawn(async move {
            service
                .update(
                    id,
                    FighterPatch {
                        name: Some("SHIN RYU".to_string()),
                        ..Default::default()
                    },
                )
                .await
        })
    };
    let mover = {
        let service = service.clone();
        tokio::spawn(async move {
            service
                .update(
                    id,
                    FighterPatch {
                        special_move: Some(Some("Shin Shoryuken".to_string())),
                        ..Default::default()
                    },
                )
                .await
        })
    };

    renamer.await.unwrap().unwrap();
    mover.await.unwrap().unwrap();

    let fighter = service.get(id).await.unwrap();
    assert_eq!(fighter.name, "SHIN RYU");
    assert_eq!(fighter.origin, "Japan");
    assert_eq!(fighter.special_move.as_deref(), Some("Shin Shoryuken"));
}

#[tokio::test]
async fn seed_inserts_default_roster_once() {
    let service = memory_service().await;

    let added = seed_fighters(&service, true).await.unwrap();
    assert_eq!(added, DEFAULT_ROSTER.len());

    let again = seed_fighters(&service, true).await.unwrap();
    assert_eq!(again, 0);

    let fighters = service.list().await.unwrap();
    assert_eq!(fighters.len(), 6);
    assert_eq!(fighters[0].name, "RYU");
    assert_eq!(fighters[0].special_move.as_deref(), Some("Hadouken"));
    assert_eq!(fighters[5].name, "JAMIE");
}

#[tokio::test]
async fn file_store_persists_across_reopen() {
    let (url, path) = temp_db_url();

    {
        let service = SeaOrmFighterService::new(Store::new(&url).await.unwrap());
        seed_fighters(&service, true).await.unwrap();
        service.delete(6).await.unwrap();
    }

    let store = Store::new(&url).await.unwrap();
    store.ping().await.unwrap();
    assert_eq!(store.count_fighters().await.unwrap(), 5);

    let service = SeaOrmFighterService::new(store);
    let id = service.create(NewFighter::new("JAMIE", "Hong Kong")).await.unwrap();
    assert_eq!(id, 7);

    std::fs::remove_file(path).ok();
}
