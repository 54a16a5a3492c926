//! SQLite-backed monster store

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::error::{AppError, Result};
use crate::store::models::{Monster, MonsterChanges, NewMonster};
use crate::store::schema;
use crate::store::traits::MonsterStore;

const SELECT_MONSTERS: &str = "SELECT id, name, level, created_at, updated_at FROM monsters";

/// Monster store over a sqlx SQLite pool
#[derive(Debug, Clone)]
pub struct SqliteMonsterStore {
    pool: SqlitePool,
}

impl SqliteMonsterStore {
    /// Open a pool from configuration
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(config.create_if_missing);

        // Every connection to `sqlite::memory:` is its own database, so the
        // pool must keep exactly one connection alive for its whole life.
        let pool_options = if is_in_memory(&config.url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections)
        };

        let pool = pool_options.connect_with(options).await?;
        info!(url = %config.url, "Connected to database");

        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the schema if it does not exist yet
    pub async fn migrate(&self) -> Result<()> {
        schema::migrate(&self.pool).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[async_trait]
impl MonsterStore for SqliteMonsterStore {
    async fn list(&self) -> Result<Vec<Monster>> {
        let monsters = sqlx::query_as::<_, Monster>(&format!("{} ORDER BY id", SELECT_MONSTERS))
            .fetch_all(&self.pool)
            .await?;

        debug!(count = monsters.len(), "Loaded monsters");
        Ok(monsters)
    }

    async fn get(&self, id: i64) -> Result<Option<Monster>> {
        let monster = sqlx::query_as::<_, Monster>(&format!("{} WHERE id = ?", SELECT_MONSTERS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(monster)
    }

    async fn create(&self, monster: NewMonster) -> Result<Monster> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO monsters (name, level, created_at, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&monster.name)
        .bind(monster.level)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, name = %monster.name, "Inserted monster");

        Ok(Monster {
            id,
            name: monster.name,
            level: monster.level,
            created_at: Some(now),
            updated_at: Some(now),
        })
    }

    async fn update(&self, id: i64, changes: MonsterChanges) -> Result<()> {
        let result = sqlx::query(
            "UPDATE monsters \
             SET name = COALESCE(?, name), level = COALESCE(?, level), updated_at = ? \
             WHERE id = ?",
        )
        .bind(changes.name.as_deref())
        .bind(changes.level)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::monster_not_found(id));
        }

        debug!(id, "Updated monster");
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM monsters WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::monster_not_found(id));
        }

        debug!(id, "Deleted monster");
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
