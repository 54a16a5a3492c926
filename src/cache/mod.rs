//! Cache module - read-through cache over the monster listing

pub mod monster_cache;

pub use monster_cache::MonsterCache;
