//! Core utilities for the MLB team stats CLI
//!
//! - `cache`: two-tier (memory + disk) caching of raw API documents

pub mod cache;

pub use cache::{
    cache_base_dir, try_read_to_string, write_string, CacheKey, GameFeedCacheKey,
    ScheduleCacheKey, TeamsCacheKey, UnifiedCache, GLOBAL_CACHE,
};
