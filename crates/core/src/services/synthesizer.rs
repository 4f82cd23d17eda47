use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::range::RangeSpec;
use crate::models::series::SeriesPoint;

/// Synthesizes a plausible price/volume series from a base price and a
/// range configuration, standing in for real market data.
///
/// The series is a random walk with a small linear drift: unbiased noise
/// scaled by the range's volatility and the base price, plus a trend term
/// that accumulates to ±0.1% of the base price by the final point. Prices
/// are floored at 10% of the base so noise can never drive them negative
/// or pathologically small.
///
/// Synthesis is stochastic by default: two calls with identical inputs
/// produce different series. [`SeriesSynthesizer::with_seed`] pins the RNG
/// for deterministic output in tests.
pub struct SeriesSynthesizer {
    rng: StdRng,
}

impl SeriesSynthesizer {
    /// Synthesizer seeded from OS entropy (production path).
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Synthesizer with a fixed seed, for reproducible series.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `spec.point_count` samples ending just before `now`,
    /// spaced `spec.interval_ms` apart, oldest first.
    ///
    /// A non-positive `base_price` is absorbed by the floor clamp rather
    /// than rejected: the chart must always render something.
    pub fn synthesize(
        &mut self,
        base_price: f64,
        spec: &RangeSpec,
        trend_bias: bool,
        now: DateTime<Utc>,
    ) -> Vec<SeriesPoint> {
        let points = spec.point_count;
        let interval = Duration::milliseconds(spec.interval_ms);
        let start = now - interval * points as i32;

        let trend_direction = if trend_bias { 1.0 } else { -1.0 };
        let floor = base_price * 0.1;

        let mut current_price = base_price;
        let mut series = Vec::with_capacity(points);

        for i in 0..points {
            let timestamp = start + interval * i as i32;

            let random_change =
                (self.rng.gen::<f64>() - 0.5) * spec.volatility * base_price;
            let trend_change =
                (trend_direction * 0.001 * base_price * i as f64) / points as f64;
            current_price += random_change + trend_change;
            current_price = current_price.max(floor);

            series.push(SeriesPoint {
                timestamp,
                price: round2(current_price),
                volume: self.rng.gen_range(100_000..1_100_000),
            });
        }

        series
    }
}

impl Default for SeriesSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
