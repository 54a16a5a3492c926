//! Unit tests for the monster listing cache

use monsters_api::cache::MonsterCache;
use monsters_api::store::Monster;
use monsters_api::AppError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn monsters(names: &[&str]) -> Vec<Monster> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Monster {
            id: i as i64 + 1,
            name: name.to_string(),
            level: 1,
            created_at: None,
            updated_at: None,
        })
        .collect()
}

#[tokio::test]
async fn test_second_read_is_served_from_cache() {
    let cache = MonsterCache::new(true, Duration::from_secs(60));
    let loads = AtomicUsize::new(0);

    for _ in 0..3 {
        let listing = cache
            .get_or_load(|| async {
                loads.fetch_add(1, Ordering::SeqCst);
                Ok(monsters(&["Steve"]))
            })
            .await
            .unwrap();
        assert_eq!(listing.len(), 1);
    }

    assert_eq!(loads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_invalidate_forces_reload() {
    let cache = MonsterCache::new(true, Duration::from_secs(60));

    cache
        .get_or_load(|| async { Ok(monsters(&["Steve"])) })
        .await
        .unwrap();
    cache.invalidate();

    let listing = cache
        .get_or_load(|| async { Ok(monsters(&["Steve", "Louisa"])) })
        .await
        .unwrap();

    assert_eq!(listing.len(), 2);
    assert_eq!(cache.get().unwrap().len(), 2);
}

#[tokio::test]
async fn test_disabled_cache_always_loads() {
    let cache = MonsterCache::disabled();
    let loads = AtomicUsize::new(0);

    for _ in 0..2 {
        cache
            .get_or_load(|| async {
                loads.fetch_add(1, Ordering::SeqCst);
                Ok(monsters(&["Steve"]))
            })
            .await
            .unwrap();
    }

    assert!(!cache.is_enabled());
    assert!(cache.get().is_none());
    assert_eq!(loads.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_failed_load_is_not_cached() {
    let cache = MonsterCache::new(true, Duration::from_secs(60));

    let result = cache
        .get_or_load(|| async { Err(AppError::Internal("store offline".to_string())) })
        .await;
    assert!(result.is_err());
    assert!(cache.get().is_none());

    let listing = cache
        .get_or_load(|| async { Ok(monsters(&["Steve"])) })
        .await
        .unwrap();
    assert_eq!(listing[0].name, "Steve");
}

#[test]
fn test_invalidate_bumps_generation() {
    let cache = MonsterCache::default();
    let before = cache.generation();

    cache.invalidate();

    assert_eq!(cache.generation(), before + 1);
}
