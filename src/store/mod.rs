//! Store module - Monster persistence trait, SQLite implementation, and schema

pub mod models;
pub mod schema;
pub mod sqlite;
pub mod traits;

pub use models::{Monster, MonsterChanges, NewMonster};
pub use sqlite::SqliteMonsterStore;
pub use traits::MonsterStore;
