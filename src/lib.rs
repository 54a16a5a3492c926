//! Monsters API
//!
//! A REST service exposing create, read, update, and delete operations over a
//! single `monsters` table. The table is the only source of truth; the listing
//! cache in [`AppState`] is cleared on every mutation.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod store;

pub use error::{AppError, Result};

use std::sync::Arc;

use cache::MonsterCache;
use config::Settings;
use store::MonsterStore;

/// Application state shared across all handlers
pub struct AppState {
    pub settings: Arc<Settings>,
    pub store: Arc<dyn MonsterStore>,
    pub cache: Arc<MonsterCache>,
}

impl AppState {
    /// Build state around a store, sizing the cache from `settings`
    pub fn new(settings: Settings, store: Arc<dyn MonsterStore>) -> Self {
        let cache = Arc::new(MonsterCache::from_config(&settings.cache));
        Self {
            settings: Arc::new(settings),
            store,
            cache,
        }
    }
}
