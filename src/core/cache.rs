//! Unified caching for raw MLB API documents
//!
//! Two tiers, in the usual order:
//! - L1: in-memory LRU cache for documents re-read within one run
//! - L2: JSON files under the user cache directory, which double as the
//!   persisted raw artifacts the report command aggregates from
//!
//! Disk entries are written verbatim as fetched so a season can be
//! re-reported without any network access.

use lru::LruCache;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    fs,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::cli::types::{GamePk, Season, TeamId};

/// Base directory: `~/.cache/mlb-team-stats/`
pub fn cache_base_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("mlb-team-stats")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Cache key usable for both the memory and the disk tier
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// String representation used as the file stem on disk
    fn to_file_key(&self) -> String;

    /// File path for this cache entry
    fn to_file_path(&self) -> PathBuf {
        cache_base_dir().join(format!("{}.json", self.to_file_key()))
    }
}

/// Cache key for the league-wide team listing of a season
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TeamsCacheKey {
    pub season: Season,
}

impl CacheKey for TeamsCacheKey {
    fn to_file_key(&self) -> String {
        format!("teams_s{}", self.season.as_u16())
    }
}

/// Cache key for one team's season schedule
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScheduleCacheKey {
    pub team_id: TeamId,
    pub season: Season,
}

impl CacheKey for ScheduleCacheKey {
    fn to_file_key(&self) -> String {
        format!(
            "schedule_t{}_s{}",
            self.team_id.as_u32(),
            self.season.as_u16()
        )
    }
}

/// Cache key for one game's raw live-feed document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameFeedCacheKey {
    pub game_pk: GamePk,
}

impl CacheKey for GameFeedCacheKey {
    fn to_file_key(&self) -> String {
        format!("game_{}", self.game_pk.as_u64())
    }
}

/// Unified cache that combines LRU memory cache with file system persistence
pub struct UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    memory_cache: Arc<Mutex<LruCache<K, V>>>,
    memory_capacity: usize,
}

impl<K, V> UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    /// Create a new unified cache with specified memory capacity
    pub fn new(memory_capacity: usize) -> Self {
        Self {
            memory_cache: Arc::new(Mutex::new(LruCache::new(
                NonZeroUsize::new(memory_capacity).unwrap(),
            ))),
            memory_capacity,
        }
    }

    /// Get an item from cache (checks memory first, then disk)
    pub fn get(&self, key: &K) -> Option<V> {
        if let Some(value) = self.memory_cache.lock().unwrap().get(key) {
            return Some(value.clone());
        }

        // Fall back to disk, promoting hits into memory
        if let Some(value) = self.get_from_disk(key) {
            self.memory_cache
                .lock()
                .unwrap()
                .put(key.clone(), value.clone());
            return Some(value);
        }

        None
    }

    /// Put an item into cache (stores in both memory and disk)
    pub fn put(&self, key: K, value: V) {
        self.memory_cache
            .lock()
            .unwrap()
            .put(key.clone(), value.clone());

        let _ = self.put_to_disk(&key, &value);
    }

    fn get_from_disk(&self, key: &K) -> Option<V> {
        let path = key.to_file_path();
        let content = try_read_to_string(&path)?;
        serde_json::from_str(&content).ok()
    }

    fn put_to_disk(&self, key: &K, value: &V) -> std::io::Result<()> {
        let path = key.to_file_path();
        let content = serde_json::to_string_pretty(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        write_string(&path, &content)
    }

    /// Clear memory cache only (keeps disk cache)
    pub fn clear_memory(&self) {
        self.memory_cache.lock().unwrap().clear();
    }

    /// Remove the disk entry for a key (used when forcing a refresh)
    pub fn invalidate_disk_cache(&self, key: &K) -> std::io::Result<()> {
        let path = key.to_file_path();
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Get memory cache statistics
    pub fn memory_stats(&self) -> (usize, usize) {
        let cache = self.memory_cache.lock().unwrap();
        (cache.len(), self.memory_capacity)
    }
}

/// Global cache manager for the raw MLB documents the tool works with
pub struct CacheManager {
    pub teams: UnifiedCache<TeamsCacheKey, Value>,
    pub schedule: UnifiedCache<ScheduleCacheKey, Value>,
    pub game_feed: UnifiedCache<GameFeedCacheKey, Value>,
}

impl CacheManager {
    pub fn new() -> Self {
        Self {
            teams: UnifiedCache::new(4),
            schedule: UnifiedCache::new(8),
            game_feed: UnifiedCache::new(200), // a full regular season fits
        }
    }

    /// Clear all memory caches
    pub fn clear_all_memory(&self) {
        self.teams.clear_memory();
        self.schedule.clear_memory();
        self.game_feed.clear_memory();
    }
}

impl Default for CacheManager {
    fn default() -> Self {
        Self::new()
    }
}

use std::sync::LazyLock;

/// Global cache manager instance for use across the application
pub static GLOBAL_CACHE: LazyLock<CacheManager> = LazyLock::new(CacheManager::new);
