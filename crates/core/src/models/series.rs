use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::range::TimeRange;

/// How long a cached series stays fresh: 5 minutes, fixed.
/// Short enough for a "real-time feel", long enough to absorb rapid
/// range switching in the UI without re-synthesizing.
pub const CACHE_TTL_MS: i64 = 5 * 60 * 1000;

/// A single synthesized sample on a price chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Instant this sample represents. Rendering to an axis label is the
    /// caller's job, via the range's `LabelGranularity`.
    pub timestamp: DateTime<Utc>,

    /// Price at this sample, rounded to 2 decimal places. Never drops
    /// below 10% of the base price the series was synthesized from.
    pub price: f64,

    /// Traded volume at this sample, independently randomized.
    pub volume: u64,
}

/// Cache key: (symbol, range) e.g. ("TCS", 1D)
pub type SeriesCacheKey = (String, TimeRange);

/// One cached series, immutable once constructed. A refresh stores a
/// wholly new entry; nothing ever mutates an existing one in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The synthesized series, oldest point first.
    pub series: Vec<SeriesPoint>,

    /// When this entry was produced. Non-decreasing across regenerations
    /// of the same key (the clock only moves forward).
    pub generated_at: DateTime<Utc>,
}

/// In-memory store of synthesized chart series, keyed by (symbol, range).
///
/// Expiry is purely time-based: an entry older than [`CACHE_TTL_MS`] is
/// stale and gets overwritten on the next request for its key. There is
/// no background sweep and no capacity bound: key cardinality is
/// symbols × 6 ranges, small and finite in the served domain.
///
/// Methods take an explicit `now` so freshness is testable without a
/// global clock; the chart service supplies it from its injected `Clock`.
#[derive(Debug, Clone, Default)]
pub struct ChartCache {
    entries: HashMap<SeriesCacheKey, CacheEntry>,
}

impl ChartCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the cached entry for (symbol, range), fresh or not.
    pub fn get(&self, symbol: &str, range: TimeRange) -> Option<&CacheEntry> {
        self.entries.get(&(symbol.to_uppercase(), range))
    }

    /// Store a freshly synthesized series for (symbol, range), stamped
    /// with `now`. Overwrites any prior entry for the key; entries are
    /// replaced on regeneration, never updated.
    pub fn put(
        &mut self,
        symbol: &str,
        range: TimeRange,
        series: Vec<SeriesPoint>,
        now: DateTime<Utc>,
    ) -> &CacheEntry {
        let key = (symbol.to_uppercase(), range);
        let entry = CacheEntry {
            series,
            generated_at: now,
        };
        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(entry);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(entry),
        }
    }

    /// True iff the entry is still within its TTL at `now`.
    pub fn is_fresh_at(&self, entry: &CacheEntry, now: DateTime<Utc>) -> bool {
        now - entry.generated_at < Duration::milliseconds(CACHE_TTL_MS)
    }

    /// Number of distinct (symbol, range) keys currently resident.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Drop all cached series.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
