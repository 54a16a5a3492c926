//! Table definitions applied at startup

use sqlx::SqlitePool;
use tracing::info;

use crate::error::Result;

/// The `monsters` table. Timestamps are nullable so rows written by other
/// tools without them still load.
pub const CREATE_MONSTERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS monsters (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    level       INTEGER NOT NULL,
    created_at  DATETIME NULL,
    updated_at  DATETIME NULL
)
"#;

/// Create any missing tables
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::query(CREATE_MONSTERS_TABLE).execute(pool).await?;
    info!(table = "monsters", "Schema is up to date");
    Ok(())
}
