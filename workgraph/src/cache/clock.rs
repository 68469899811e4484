//! Resource clocks.
//!
//! The cache never reads time or modification times directly; everything
//! flows through a [`ResourceClock`]. Production code uses [`SystemClock`],
//! tests drive a [`ManualClock`] to any point in time without sleeping or
//! touching the filesystem.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

/// Oracle for wall-clock time and resource modification times.
///
/// Consulted on every cache write (to snapshot) and every read (to
/// re-check), so implementations must be cheap to call and safe to share
/// across threads.
pub trait ResourceClock: Send + Sync {
    /// Current time.
    fn now(&self) -> DateTime<Utc>;

    /// Last modification time of a resource, `None` when it does not exist.
    fn mod_time(&self, resource: &Path) -> Option<DateTime<Utc>>;
}

/// Clock backed by system time and filesystem metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ResourceClock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn mod_time(&self, resource: &Path) -> Option<DateTime<Utc>> {
        let modified = fs::metadata(resource).ok()?.modified().ok()?;
        Some(DateTime::<Utc>::from(modified))
    }
}

/// Hand-driven clock.
///
/// Clones share state: a test keeps one handle and gives the cache the
/// other, then advances time or touches resources between calls. Paths are
/// matched exactly as stored, so store them in the same absolute form the
/// cache keys with.
#[derive(Clone)]
pub struct ManualClock {
    inner: Arc<Mutex<ManualClockState>>,
}

struct ManualClockState {
    now: DateTime<Utc>,
    mtimes: FxHashMap<PathBuf, DateTime<Utc>>,
}

impl ManualClock {
    /// Clock frozen at `start` with no resources known.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ManualClockState {
                now: start,
                mtimes: FxHashMap::default(),
            })),
        }
    }

    /// Move current time forward.
    pub fn advance(&self, by: Duration) {
        let mut state = self.inner.lock();
        state.now = state.now + by;
    }

    /// Set a resource's modification time, creating the resource if unknown.
    pub fn touch(&self, resource: impl Into<PathBuf>, mtime: DateTime<Utc>) {
        self.inner.lock().mtimes.insert(resource.into(), mtime);
    }

    /// Forget a resource, as if it were deleted.
    pub fn remove(&self, resource: &Path) {
        self.inner.lock().mtimes.remove(resource);
    }
}

impl ResourceClock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.inner.lock().now
    }

    fn mod_time(&self, resource: &Path) -> Option<DateTime<Utc>> {
        self.inner.lock().mtimes.get(resource).copied()
    }
}
