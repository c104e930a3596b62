//! Account data cache with epoch-ms staleness tracking.
//!
//! The balance summary and the position list are stored and replaced as one
//! unit, stamped with the fetch time in epoch milliseconds. That is what
//! guarantees a risk snapshot never mixes a stale balance with fresh
//! positions: both halves come from the same poll.
//!
//! Staleness is epoch-arithmetic only, so the age survives a process
//! restart; missing timestamps and clock skew fail closed to `Stale`.

use risk_core::classify::AccountSnapshot;

use crate::feed::payload::{AccountSummary, OpenPosition};
use crate::snapshot::build_snapshot;

/// One consistent fetch of account state.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountData {
    /// Balance summary.
    pub summary: AccountSummary,
    /// Open positions at the same fetch.
    pub positions: Vec<OpenPosition>,
    /// Epoch milliseconds when this data was fetched.
    pub cached_at_ts_ms: u64,
}

/// Cache holding the most recent account fetch.
#[derive(Debug, Clone, Default)]
pub struct AccountCache {
    data: Option<AccountData>,
}

impl AccountCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached data with a fresh fetch.
    pub fn update(&mut self, data: AccountData) {
        self.data = Some(data);
    }

    /// Get the current account data, if available.
    pub fn get(&self) -> Option<&AccountData> {
        self.data.as_ref()
    }

    /// Get the cached-at timestamp in epoch milliseconds.
    /// Returns None if nothing has been cached.
    pub fn cached_at_ts_ms(&self) -> Option<u64> {
        self.data.as_ref().map(|d| d.cached_at_ts_ms)
    }

    /// Build a risk snapshot from the cached pair.
    ///
    /// Summary and positions are drawn from the same fetch, so the snapshot
    /// is a single consistent read by construction. Returns None on an
    /// empty cache.
    pub fn snapshot(&self) -> Option<AccountSnapshot> {
        self.data
            .as_ref()
            .map(|d| build_snapshot(&d.summary, &d.positions))
    }
}

/// Snapshot age classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotAge {
    /// Within the max-age window: safe to evaluate.
    Fresh,
    /// Too old, missing, or clock-skewed: re-fetch before evaluating.
    Stale,
}

/// Classify the age of cached account data.
///
/// - Missing timestamp → `Stale` (fail-closed).
/// - `now_ms < cached_at` (clock skew) → `Stale` (fail-closed).
/// - Age strictly greater than `max_age_ms` → `Stale`.
pub fn evaluate_snapshot_age(
    cached_at_ts_ms: Option<u64>,
    now_ms: u64,
    max_age_ms: u64,
) -> SnapshotAge {
    let cached_at = match cached_at_ts_ms {
        Some(ts) => ts,
        None => return SnapshotAge::Stale,
    };
    if now_ms < cached_at {
        return SnapshotAge::Stale;
    }
    if now_ms - cached_at > max_age_ms {
        return SnapshotAge::Stale;
    }
    SnapshotAge::Fresh
}
