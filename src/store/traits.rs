//! Persistence seam used by the HTTP handlers

use async_trait::async_trait;

use crate::error::Result;
use crate::store::models::{Monster, MonsterChanges, NewMonster};

/// Source of truth for monster records
#[async_trait]
pub trait MonsterStore: Send + Sync {
    /// All monsters ordered by id
    async fn list(&self) -> Result<Vec<Monster>>;

    /// A single monster, or `None` if no row has this id
    async fn get(&self, id: i64) -> Result<Option<Monster>>;

    /// Insert a monster and return the stored row
    async fn create(&self, monster: NewMonster) -> Result<Monster>;

    /// Apply a partial update. Fails with `AppError::NotFound` if the id is unknown.
    async fn update(&self, id: i64, changes: MonsterChanges) -> Result<()>;

    /// Remove a monster. Fails with `AppError::NotFound` if the id is unknown.
    async fn delete(&self, id: i64) -> Result<()>;

    /// Round-trip to the store for health reporting
    async fn ping(&self) -> Result<()>;
}
