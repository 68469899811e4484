//! Dependency-aware staleness caching.
//!
//! A cache entry remembers when it was written and the modification times of
//! its resource and declared dependencies at that moment. Validity is
//! re-derived on every read against a [`ResourceClock`]: an elapsed TTL, a
//! changed resource, or a changed dependency each invalidate the whole
//! entry.

mod clock;
mod entry;
mod store;

pub use clock::{ManualClock, ResourceClock, SystemClock};
pub use entry::{CacheEntry, DependencySnapshot, Staleness};
pub use store::StalenessCache;
