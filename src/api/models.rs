//! API request and response models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, Result};
use crate::store::{Monster, MonsterChanges, NewMonster};

/// Longest accepted monster name, in characters
pub const MAX_NAME_LENGTH: usize = 255;

/// Monster fields as submitted by clients.
///
/// Identifier and timestamps are assigned by the server; any such keys in the
/// body are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct MonsterInput {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub level: Option<i64>,
}

/// Body of `POST /api/v1/monsters`
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateMonsterRequest {
    #[serde(default)]
    pub monster: Option<MonsterInput>,
}

/// Body of `PUT /api/v1/monsters/{id}`
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UpdateMonsterRequest {
    #[serde(default)]
    pub monster: Option<MonsterInput>,
}

impl CreateMonsterRequest {
    /// Validate into an insertable monster. `name` and `level` are both required.
    pub fn into_new_monster(self) -> Result<NewMonster> {
        let input = self
            .monster
            .ok_or_else(|| AppError::Validation("Missing 'monster' object".to_string()))?;

        let name = input
            .name
            .ok_or_else(|| AppError::Validation("Missing required field 'name'".to_string()))?;
        let level = input
            .level
            .ok_or_else(|| AppError::Validation("Missing required field 'level'".to_string()))?;

        Ok(NewMonster {
            name: validate_name(&name)?,
            level: validate_level(level)?,
        })
    }
}

impl UpdateMonsterRequest {
    /// Validate into a partial update with at least one field
    pub fn into_changes(self) -> Result<MonsterChanges> {
        let input = self
            .monster
            .ok_or_else(|| AppError::Validation("Missing 'monster' object".to_string()))?;

        let changes = MonsterChanges {
            name: input.name.as_deref().map(validate_name).transpose()?,
            level: input.level.map(validate_level).transpose()?,
        };

        if changes.is_empty() {
            return Err(AppError::Validation(
                "At least one of 'name' or 'level' must be provided".to_string(),
            ));
        }

        Ok(changes)
    }
}

fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("'name' cannot be blank".to_string()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::Validation(format!(
            "'name' cannot be longer than {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(name.to_string())
}

fn validate_level(level: i64) -> Result<i64> {
    if level < 0 {
        return Err(AppError::Validation("'level' cannot be negative".to_string()));
    }
    Ok(level)
}

/// Listing response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MonsterListResponse {
    pub monsters: Vec<Monster>,
}

/// Single monster response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MonsterResponse {
    pub monster: Monster,
}

/// Health check response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}

/// Error body returned by every failing request
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: String,
}
