//! Configuration types for the staleness cache.

use chrono::Duration;

use crate::models::Priority;

/// Priority-scaled time-to-live table for cache entries.
///
/// Construct any table and hand it to the cache; the defaults range from a
/// one-day lifetime for `P0` entries up to two weeks for `P3`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TtlPolicy {
    pub p0: Duration,
    pub p1: Duration,
    pub p2: Duration,
    pub p3: Duration,
}

impl TtlPolicy {
    /// Lifetime for entries of the given priority.
    pub fn ttl(&self, priority: Priority) -> Duration {
        match priority {
            Priority::P0 => self.p0,
            Priority::P1 => self.p1,
            Priority::P2 => self.p2,
            Priority::P3 => self.p3,
        }
    }
}

impl Default for TtlPolicy {
    fn default() -> Self {
        Self {
            p0: Duration::days(1),
            p1: Duration::days(3),
            p2: Duration::days(7),
            p3: Duration::days(14),
        }
    }
}

/// Configuration for one cache instance.
#[derive(Clone, Debug, Default)]
pub struct CacheConfig {
    /// Per-priority entry lifetimes.
    pub ttl: TtlPolicy,
    /// Log verbosity, see [`crate::logging`].
    pub verbosity: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttls() {
        let policy = TtlPolicy::default();
        assert_eq!(policy.ttl(Priority::P0), Duration::days(1));
        assert_eq!(policy.ttl(Priority::P1), Duration::days(3));
        assert_eq!(policy.ttl(Priority::P2), Duration::days(7));
        assert_eq!(policy.ttl(Priority::P3), Duration::days(14));
    }

    #[test]
    fn test_default_ttls_grow_with_priority() {
        let policy = TtlPolicy::default();
        for pair in Priority::ALL.windows(2) {
            assert!(policy.ttl(pair[0]) < policy.ttl(pair[1]));
        }
    }

    #[test]
    fn test_custom_policy() {
        let policy = TtlPolicy {
            p0: Duration::minutes(5),
            p1: Duration::hours(1),
            p2: Duration::hours(6),
            p3: Duration::days(1),
        };
        assert_eq!(policy.ttl(Priority::P0), Duration::minutes(5));
        assert_eq!(policy.ttl(Priority::P3), Duration::days(1));
    }

    #[test]
    fn test_config_default_is_silent() {
        let config = CacheConfig::default();
        assert_eq!(config.verbosity, 0);
        assert_eq!(config.ttl, TtlPolicy::default());
    }
}
