use log::debug;

use crate::models::range::TimeRange;
use crate::models::series::{ChartCache, SeriesPoint};
use crate::services::clock::{Clock, SystemClock};
use crate::services::synthesizer::SeriesSynthesizer;

/// Serves chart series with short-TTL memoization.
///
/// Cache strategy:
/// - **Hit and fresh**: return the cached series as-is, with no new
///   randomization, so rapid range switching in the UI is cheap.
/// - **Miss or stale**: synthesize, store a new entry, return it. The
///   prior entry for the key is overwritten, never mutated.
///
/// The cache itself is injected per call (the facade owns one instance
/// for the process lifetime), so tests construct a fresh cache per case
/// and nothing leaks between them.
pub struct ChartService {
    synthesizer: SeriesSynthesizer,
    clock: Box<dyn Clock>,
}

impl ChartService {
    pub fn new() -> Self {
        Self {
            synthesizer: SeriesSynthesizer::new(),
            clock: Box::new(SystemClock),
        }
    }

    /// Build a service with an explicit synthesizer and clock.
    /// Tests use this to pin the seed and hold or advance time.
    pub fn with_parts(synthesizer: SeriesSynthesizer, clock: Box<dyn Clock>) -> Self {
        Self { synthesizer, clock }
    }

    /// Get the chart series for (symbol, range), consulting the cache.
    ///
    /// Synthesis cannot fail for any finite numeric `base_price`; the
    /// only error path in the chart layer is unknown-range label parsing,
    /// which happens before this call (`TimeRange` here is already valid).
    pub fn get_series(
        &mut self,
        cache: &mut ChartCache,
        symbol: &str,
        range: TimeRange,
        base_price: f64,
        trend_bias: bool,
    ) -> Vec<SeriesPoint> {
        let now = self.clock.now();

        if let Some(entry) = cache.get(symbol, range) {
            if cache.is_fresh_at(entry, now) {
                debug!("chart cache hit for {symbol} {range}");
                return entry.series.clone();
            }
        }

        debug!("chart cache miss for {symbol} {range}, synthesizing");
        let spec = range.spec();
        let series = self
            .synthesizer
            .synthesize(base_price, &spec, trend_bias, now);
        cache.put(symbol, range, series.clone(), now);
        series
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
