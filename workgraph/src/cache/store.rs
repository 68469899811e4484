//! The staleness cache.
//!
//! Stores caller-defined results keyed by normalized resource path. Validity
//! is never assumed: every read re-derives it from the entry's age, the
//! resource's current modification time, and every dependency's current
//! modification time. One failing clause invalidates the whole entry.

use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::config::CacheConfig;
use crate::models::Priority;
use crate::{log_changes, log_checks, log_debug};

use super::clock::{ResourceClock, SystemClock};
use super::entry::{CacheEntry, DependencySnapshot, Staleness};

/// Dependency-aware result cache with priority-scaled TTLs.
///
/// Each instance owns its backing store; independent lifetimes get
/// independent instances, and there is no process-wide cache. All methods
/// take `&self` and serialize internally, so one instance can be shared
/// across threads behind `Arc`.
pub struct StalenessCache<T> {
    entries: Mutex<FxHashMap<PathBuf, CacheEntry<T>>>,
    clock: Box<dyn ResourceClock>,
    config: CacheConfig,
    base_dir: PathBuf,
}

impl<T: Clone> StalenessCache<T> {
    /// Cache over system time and the real filesystem.
    ///
    /// Relative resource paths are resolved against `base_dir` before
    /// keying, so `base_dir` should itself be absolute.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self::with_clock(base_dir, CacheConfig::default(), SystemClock)
    }

    /// Cache with explicit configuration and clock.
    pub fn with_clock(
        base_dir: impl Into<PathBuf>,
        config: CacheConfig,
        clock: impl ResourceClock + 'static,
    ) -> Self {
        Self {
            entries: Mutex::new(FxHashMap::default()),
            clock: Box::new(clock),
            config,
            base_dir: base_dir.into(),
        }
    }

    /// Look up the entry for a resource.
    ///
    /// Hits only when the stored entry passes every validity clause against
    /// live clock readings. A stale entry is removed on the way out, so the
    /// miss is indistinguishable from absence.
    pub fn get(&self, resource: impl AsRef<Path>) -> Option<CacheEntry<T>> {
        let key = self.normalize(resource.as_ref());
        let mut entries = self.entries.lock();
        let staleness = match entries.get(&key) {
            Some(entry) => self.staleness_of(entry),
            None => Staleness::NoEntry,
        };
        if staleness.is_fresh() {
            log_checks!(self.config.verbosity, "cache hit: {}", key.display());
            return entries.get(&key).cloned();
        }
        if staleness != Staleness::NoEntry {
            entries.remove(&key);
        }
        log_checks!(
            self.config.verbosity,
            "cache miss ({}): {}",
            staleness,
            key.display()
        );
        None
    }

    /// Store a result, replacing any prior entry under the same key.
    ///
    /// The resource's and every dependency's modification times are
    /// snapshotted now; readers see the new entry as one unit.
    pub fn put<I>(&self, resource: impl AsRef<Path>, payload: T, priority: Priority, dependencies: I)
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let key = self.normalize(resource.as_ref());
        let resource_mtime = self.clock.mod_time(&key);
        let dependencies: Vec<DependencySnapshot> = dependencies
            .into_iter()
            .map(|dep| {
                let resource = self.normalize(dep.as_ref());
                let mtime = self.clock.mod_time(&resource);
                DependencySnapshot { resource, mtime }
            })
            .collect();

        let entry = CacheEntry {
            resource: key.clone(),
            payload,
            created_at: self.clock.now(),
            priority,
            resource_mtime,
            dependencies,
        };

        self.entries.lock().insert(key.clone(), entry);
        log_changes!(
            self.config.verbosity,
            "cache store ({}): {}",
            priority,
            key.display()
        );
    }

    /// Drop an entry regardless of validity, for resources known to have
    /// changed out of band. Returns whether an entry was present.
    pub fn invalidate(&self, resource: impl AsRef<Path>) -> bool {
        let key = self.normalize(resource.as_ref());
        let removed = self.entries.lock().remove(&key).is_some();
        if removed {
            log_changes!(self.config.verbosity, "cache invalidate: {}", key.display());
        }
        removed
    }

    /// True when a lookup for this resource would miss.
    pub fn needs_refresh(&self, resource: impl AsRef<Path>) -> bool {
        !self.probe(resource).is_fresh()
    }

    /// Classify the entry for a resource without mutating the store.
    pub fn probe(&self, resource: impl AsRef<Path>) -> Staleness {
        let key = self.normalize(resource.as_ref());
        let entries = self.entries.lock();
        match entries.get(&key) {
            Some(entry) => self.staleness_of(entry),
            None => Staleness::NoEntry,
        }
    }

    /// Remove every currently-stale entry and return how many were removed.
    ///
    /// Reads already evict what they touch; this sweeps entries no reader
    /// has visited.
    pub fn evict_stale(&self) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, entry| self.staleness_of(entry).is_fresh());
        let evicted = before - entries.len();
        if evicted > 0 {
            log_changes!(
                self.config.verbosity,
                "cache evicted {} stale entries",
                evicted
            );
        }
        evicted
    }

    /// Stored entry count, stale entries included until evicted.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Conjunctive validity: TTL, then the resource's mtime, then every
    /// dependency's mtime. The first failing clause decides.
    fn staleness_of(&self, entry: &CacheEntry<T>) -> Staleness {
        let now = self.clock.now();
        if now >= entry.created_at + self.config.ttl.ttl(entry.priority) {
            return Staleness::Expired;
        }
        if !mtime_matches(entry.resource_mtime, self.clock.mod_time(&entry.resource)) {
            return Staleness::ResourceChanged;
        }
        for dep in &entry.dependencies {
            let current = self.clock.mod_time(&dep.resource);
            if !mtime_matches(dep.mtime, current) {
                log_debug!(
                    self.config.verbosity,
                    "dependency mismatch for {}: stored {:?}, current {:?}",
                    dep.resource.display(),
                    dep.mtime,
                    current
                );
                return Staleness::DependencyChanged;
            }
        }
        Staleness::Fresh
    }

    /// Canonical key form: relative paths join the base directory, then `.`
    /// and `..` components resolve lexically. No filesystem access, so keys
    /// do not depend on symlink state.
    fn normalize(&self, resource: &Path) -> PathBuf {
        let joined = if resource.is_absolute() {
            resource.to_path_buf()
        } else {
            self.base_dir.join(resource)
        };
        let mut normalized = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
                Component::RootDir => normalized.push(component.as_os_str()),
                Component::CurDir => {}
                Component::ParentDir => {
                    normalized.pop();
                }
                Component::Normal(part) => normalized.push(part),
            }
        }
        normalized
    }
}

/// Snapshot and current mtimes match only when both exist and are equal; a
/// resource missing on either side fails the clause.
fn mtime_matches(snapshot: Option<DateTime<Utc>>, current: Option<DateTime<Utc>>) -> bool {
    matches!((snapshot, current), (Some(a), Some(b)) if a == b)
}
