//! Monster records as stored in the `monsters` table

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row from the `monsters` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Monster {
    /// System-assigned identifier
    pub id: i64,
    pub name: String,
    pub level: i64,
    /// Null for rows written without timestamps
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields required to insert a monster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMonster {
    pub name: String,
    pub level: i64,
}

/// Partial update; `None` leaves the column untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonsterChanges {
    pub name: Option<String>,
    pub level: Option<i64>,
}

impl MonsterChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.level.is_none()
    }
}
