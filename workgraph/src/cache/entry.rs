//! Cache entry types and staleness classification.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::models::Priority;

/// Modification-time snapshot of one dependency resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DependencySnapshot {
    /// Normalized dependency path.
    pub resource: PathBuf,
    /// Modification time at write time, `None` when the resource was
    /// missing.
    pub mtime: Option<DateTime<Utc>>,
}

/// One cached result together with everything needed to re-derive its
/// validity later.
///
/// Entries are immutable once written; a new write replaces the whole entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheEntry<T> {
    /// Normalized resource key.
    pub resource: PathBuf,
    /// Caller-defined result.
    pub payload: T,
    /// Write time; the TTL counts from here.
    pub created_at: DateTime<Utc>,
    /// Priority scaling the TTL.
    pub priority: Priority,
    /// Resource modification time at write, `None` when it was missing.
    pub resource_mtime: Option<DateTime<Utc>>,
    /// Dependency snapshots taken at write.
    pub dependencies: Vec<DependencySnapshot>,
}

/// Why a lookup would hit or miss.
///
/// Validity is conjunctive and checked in TTL, resource, dependency order;
/// the first failing clause is the one reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Staleness {
    /// An entry exists and every clause holds.
    Fresh,
    /// No entry is stored under this key.
    NoEntry,
    /// The entry outlived its priority's TTL.
    Expired,
    /// The resource's modification time differs from its snapshot, or the
    /// resource is missing on either side of the comparison.
    ResourceChanged,
    /// A dependency's modification time differs from its snapshot, or the
    /// dependency is missing on either side.
    DependencyChanged,
}

impl Staleness {
    /// True only for [`Staleness::Fresh`].
    pub fn is_fresh(self) -> bool {
        matches!(self, Staleness::Fresh)
    }
}

impl fmt::Display for Staleness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Staleness::Fresh => "fresh",
            Staleness::NoEntry => "no entry",
            Staleness::Expired => "ttl expired",
            Staleness::ResourceChanged => "resource changed",
            Staleness::DependencyChanged => "dependency changed",
        };
        write!(f, "{}", label)
    }
}
