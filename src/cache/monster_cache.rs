//! Read-through cache of the full monster listing
//!
//! The store stays the source of truth. The cache only remembers the last
//! listing it loaded and forgets it on every successful mutation or once the
//! TTL runs out. A generation counter stops a listing that was read before a
//! mutation from being cached after it.

use parking_lot::RwLock;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::config::CacheConfig;
use crate::error::Result;
use crate::store::Monster;

struct CachedListing {
    monsters: Arc<Vec<Monster>>,
    stored_at: Instant,
}

/// Listing cache owned by the application state
pub struct MonsterCache {
    enabled: bool,
    ttl: Duration,
    generation: AtomicU64,
    entry: RwLock<Option<CachedListing>>,
}

impl MonsterCache {
    pub fn new(enabled: bool, ttl: Duration) -> Self {
        Self {
            enabled,
            ttl,
            generation: AtomicU64::new(0),
            entry: RwLock::new(None),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.enabled, Duration::from_secs(config.ttl_secs))
    }

    /// A cache that never stores anything
    pub fn disabled() -> Self {
        Self::new(false, Duration::ZERO)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current generation; bumped by every invalidation
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// The cached listing, if present and not expired
    pub fn get(&self) -> Option<Arc<Vec<Monster>>> {
        if !self.enabled {
            return None;
        }

        let entry = self.entry.read();
        entry
            .as_ref()
            .filter(|cached| cached.stored_at.elapsed() < self.ttl)
            .map(|cached| cached.monsters.clone())
    }

    /// Store a listing loaded while `generation` was current. The listing is
    /// dropped (but still returned) if an invalidation happened since.
    pub fn put_if_current(&self, generation: u64, monsters: Vec<Monster>) -> Arc<Vec<Monster>> {
        let monsters = Arc::new(monsters);
        if !self.enabled {
            return monsters;
        }

        let mut entry = self.entry.write();
        if self.generation.load(Ordering::Acquire) == generation {
            *entry = Some(CachedListing {
                monsters: monsters.clone(),
                stored_at: Instant::now(),
            });
        } else {
            debug!(generation, "Discarding listing loaded before an invalidation");
        }

        monsters
    }

    /// Forget the cached listing
    pub fn invalidate(&self) {
        let mut entry = self.entry.write();
        self.generation.fetch_add(1, Ordering::AcqRel);
        *entry = None;
    }

    /// Return the cached listing or load it with `load` and cache the result
    pub async fn get_or_load<F, Fut>(&self, load: F) -> Result<Arc<Vec<Monster>>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Monster>>>,
    {
        if let Some(monsters) = self.get() {
            debug!(count = monsters.len(), "Monster listing served from cache");
            return Ok(monsters);
        }

        let generation = self.generation();
        let monsters = load().await?;
        Ok(self.put_if_current(generation, monsters))
    }
}

impl Default for MonsterCache {
    fn default() -> Self {
        Self::from_config(&CacheConfig {
            enabled: true,
            ttl_secs: 30,
        })
    }
}
