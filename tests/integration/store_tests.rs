//! SQLite store integration tests

#[path = "../common/mod.rs"]
mod common;

use common::{create_test_store, insert_monster};
use monsters_api::config::DatabaseConfig;
use monsters_api::store::{MonsterChanges, MonsterStore, NewMonster, SqliteMonsterStore};
use monsters_api::AppError;

fn new_monster(name: &str, level: i64) -> NewMonster {
    NewMonster {
        name: name.to_string(),
        level,
    }
}

#[tokio::test]
async fn test_create_then_get() {
    let store = create_test_store().await;

    let created = store.create(new_monster("Steve", 2)).await.unwrap();
    let fetched = store.get(created.id).await.unwrap().unwrap();

    assert_eq!(fetched.name, "Steve");
    assert_eq!(fetched.level, 2);
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn test_get_missing_returns_none() {
    let store = create_test_store().await;
    assert!(store.get(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let store = create_test_store().await;
    let created = store.create(new_monster("Steve", 2)).await.unwrap();

    store
        .update(
            created.id,
            MonsterChanges {
                name: Some("Louisa".to_string()),
                level: None,
            },
        )
        .await
        .unwrap();

    let updated = store.get(created.id).await.unwrap().unwrap();
    assert_eq!(updated.name, "Louisa");
    assert_eq!(updated.level, 2);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_update_sets_timestamp_on_rows_without_one() {
    let store = create_test_store().await;
    insert_monster(&store, 1, "Steve", 2).await;

    store
        .update(
            1,
            MonsterChanges {
                level: Some(4),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let updated = store.get(1).await.unwrap().unwrap();
    assert_eq!(updated.level, 4);
    assert!(updated.created_at.is_none());
    assert!(updated.updated_at.is_some());
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let store = create_test_store().await;

    let result = store
        .update(
            5,
            MonsterChanges {
                name: Some("Louisa".to_string()),
                level: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_removes_row_once() {
    let store = create_test_store().await;
    let created = store.create(new_monster("Steve", 3)).await.unwrap();

    store.delete(created.id).await.unwrap();
    assert!(store.get(created.id).await.unwrap().is_none());

    let second = store.delete(created.id).await;
    assert!(matches!(second, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_ping() {
    let store = create_test_store().await;
    assert!(store.ping().await.is_ok());

    store.close().await;
    assert!(store.ping().await.is_err());
}

#[tokio::test]
async fn test_file_database_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("monsters.db");
    let config = DatabaseConfig {
        url: format!("sqlite://{}", path.display()),
        max_connections: 2,
        create_if_missing: true,
        run_migrations: true,
    };

    let store = SqliteMonsterStore::connect(&config).await.unwrap();
    store.migrate().await.unwrap();
    store.create(new_monster("Steve", 2)).await.unwrap();
    store.close().await;

    let reopened = SqliteMonsterStore::connect(&config).await.unwrap();
    reopened.migrate().await.unwrap();
    let monsters = reopened.list().await.unwrap();

    assert_eq!(monsters.len(), 1);
    assert_eq!(monsters[0].name, "Steve");
}

#[tokio::test]
async fn test_missing_file_without_create_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig {
        url: format!("sqlite://{}", dir.path().join("absent.db").display()),
        max_connections: 1,
        create_if_missing: false,
        run_migrations: true,
    };

    assert!(SqliteMonsterStore::connect(&config).await.is_err());
}
