use serde::{Deserialize, Serialize};
use signbridge_models::{SignError, TranslationOutcome};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime};
use tracing::{debug, info, instrument, warn};

const TMP_SUFFIX: &str = ".json.tmp";

/// What is persisted per cache file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    result: TranslationOutcome,
    /// Unix seconds at write time
    timestamp: f64,
}

impl CacheEntry {
    fn is_fresh(&self, now: f64, ttl: Duration) -> bool {
        now - self.timestamp < ttl.as_secs_f64()
    }
}

/// Cache statistics for monitoring
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub writes: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Translation results stored as one JSON file per (text, language) pair.
pub struct TranslationCache {
    cache_dir: PathBuf,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
    writes: AtomicU64,
}

/// Lowercase hex MD5 of `"{text}_{language}"`.
pub fn cache_key(text: &str, language: &str) -> String {
    format!("{:x}", md5::compute(format!("{text}_{language}").as_bytes()))
}

fn now_secs() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64 / 1000.0
}

impl TranslationCache {
    pub fn new(cache_dir: impl Into<PathBuf>, ttl: Duration) -> Result<Self, SignError> {
        let cache_dir = cache_dir.into();
        fs::create_dir_all(&cache_dir)?;

        Ok(Self {
            cache_dir,
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            writes: AtomicU64::new(0),
        })
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{key}.json"))
    }

    /// Cached translation if present and younger than the TTL. Unreadable
    /// entries are treated as misses.
    #[instrument(skip(self))]
    pub fn get(&self, text: &str, language: &str) -> Option<TranslationOutcome> {
        let key = cache_key(text, language);
        let found = self
            .read_entry(&self.entry_path(&key))
            .filter(|entry| entry.is_fresh(now_secs(), self.ttl))
            .map(|entry| entry.result);

        if found.is_some() {
            debug!("Translation cache hit: {}", key);
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            debug!("Translation cache miss: {}", key);
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        found
    }

    /// Store a result. Failures are logged, never propagated.
    #[instrument(skip(self, result))]
    pub fn set(&self, text: &str, language: &str, result: &TranslationOutcome) {
        self.set_at(text, language, result, now_secs());
    }

    fn set_at(&self, text: &str, language: &str, result: &TranslationOutcome, timestamp: f64) {
        let key = cache_key(text, language);
        let entry = CacheEntry {
            result: result.clone(),
            timestamp,
        };
        match self.write_entry(&key, &entry) {
            Ok(()) => {
                self.writes.fetch_add(1, Ordering::Relaxed);
                debug!("Cached translation: {}", key);
            }
            Err(e) => warn!("Failed to write cache entry {}: {}", key, e),
        }
    }

    fn read_entry(&self, path: &Path) -> Option<CacheEntry> {
        let data = fs::read(path).ok()?;
        match serde_json::from_slice(&data) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Ignoring corrupt cache entry {}: {}", path.display(), e);
                None
            }
        }
    }

    fn write_entry(&self, key: &str, entry: &CacheEntry) -> Result<(), SignError> {
        let data = serde_json::to_vec(entry).map_err(|e| SignError::Cache {
            reason: e.to_string(),
        })?;
        // Each writer gets its own temp file; the rename is atomic
        let mut tmp = tempfile::Builder::new()
            .prefix(&format!("{key}."))
            .suffix(TMP_SUFFIX)
            .tempfile_in(&self.cache_dir)?;
        tmp.write_all(&data)?;
        tmp.persist(self.entry_path(key)).map_err(|e| e.error)?;
        Ok(())
    }

    /// Temp files left behind by an interrupted write, once older than the TTL.
    fn is_stale_leftover(&self, path: &Path) -> bool {
        let is_tmp = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(TMP_SUFFIX));
        is_tmp
            && fs::metadata(path)
                .and_then(|m| m.modified())
                .ok()
                .and_then(|modified| SystemTime::now().duration_since(modified).ok())
                .is_some_and(|age| age >= self.ttl)
    }

    /// Remove expired and unreadable entries plus stale temp files, returning
    /// how many were removed. A file that cannot be removed is logged and
    /// skipped.
    #[instrument(skip(self))]
    pub fn purge_expired(&self) -> Result<usize, SignError> {
        let now = now_secs();
        let mut removed = 0;

        for dir_entry in fs::read_dir(&self.cache_dir)? {
            let path = match dir_entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    warn!("Skipping unreadable cache directory entry: {}", e);
                    continue;
                }
            };

            let expired = if path.extension().and_then(|e| e.to_str()) == Some("json") {
                !self
                    .read_entry(&path)
                    .is_some_and(|entry| entry.is_fresh(now, self.ttl))
            } else {
                self.is_stale_leftover(&path)
            };
            if !expired {
                continue;
            }

            match fs::remove_file(&path) {
                Ok(()) => removed += 1,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    debug!("Cache entry already gone: {}", path.display());
                }
                Err(e) => warn!("Failed to remove cache entry {}: {}", path.display(), e),
            }
        }

        info!("Purged {} expired cache entries", removed);
        Ok(removed)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            writes: self.writes.load(Ordering::Relaxed),
        }
    }
}
