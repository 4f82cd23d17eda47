use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A named display window for a price chart, with an associated
/// sampling resolution. This is a closed set: the UI only ever emits
/// these six tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    /// 1D: one trading day, hourly samples
    Day,
    /// 1W: one week, daily samples
    Week,
    /// 1M: one month, daily samples
    Month,
    /// 3M: one quarter, daily samples
    Quarter,
    /// 1Y: one year, weekly samples
    Year,
    /// ALL: long-term view, monthly samples
    All,
}

/// All supported ranges, in display order.
pub const ALL_RANGES: [TimeRange; 6] = [
    TimeRange::Day,
    TimeRange::Week,
    TimeRange::Month,
    TimeRange::Quarter,
    TimeRange::Year,
    TimeRange::All,
];

impl TimeRange {
    /// Parse a UI range label ("1D", "1W", "1M", "3M", "1Y", "ALL").
    ///
    /// Fails with `UnknownRange` for anything outside the closed set.
    /// This should be unreachable in practice (the UI only emits valid
    /// labels), but the guard catches caller defects instead of mapping
    /// them to an arbitrary range.
    pub fn from_label(label: &str) -> Result<Self, CoreError> {
        match label {
            "1D" => Ok(TimeRange::Day),
            "1W" => Ok(TimeRange::Week),
            "1M" => Ok(TimeRange::Month),
            "3M" => Ok(TimeRange::Quarter),
            "1Y" => Ok(TimeRange::Year),
            "ALL" => Ok(TimeRange::All),
            other => Err(CoreError::UnknownRange(other.to_string())),
        }
    }

    /// The UI label for this range.
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Day => "1D",
            TimeRange::Week => "1W",
            TimeRange::Month => "1M",
            TimeRange::Quarter => "3M",
            TimeRange::Year => "1Y",
            TimeRange::All => "ALL",
        }
    }

    /// The fixed sampling configuration for this range.
    ///
    /// Values are design choices inherited from the dashboard and are
    /// reproduced exactly for compatibility with its charts.
    pub fn spec(&self) -> RangeSpec {
        match self {
            // hourly for 1 day
            TimeRange::Day => RangeSpec {
                point_count: 24,
                interval_ms: 60 * 60 * 1000,
                volatility: 0.02,
                granularity: LabelGranularity::HourMinute,
            },
            // daily for 1 week
            TimeRange::Week => RangeSpec {
                point_count: 7,
                interval_ms: 24 * 60 * 60 * 1000,
                volatility: 0.03,
                granularity: LabelGranularity::MonthDay,
            },
            // daily for 1 month
            TimeRange::Month => RangeSpec {
                point_count: 30,
                interval_ms: 24 * 60 * 60 * 1000,
                volatility: 0.05,
                granularity: LabelGranularity::MonthDay,
            },
            // daily for 3 months
            TimeRange::Quarter => RangeSpec {
                point_count: 90,
                interval_ms: 24 * 60 * 60 * 1000,
                volatility: 0.08,
                granularity: LabelGranularity::MonthDay,
            },
            // weekly for 1 year
            TimeRange::Year => RangeSpec {
                point_count: 52,
                interval_ms: 7 * 24 * 60 * 60 * 1000,
                volatility: 0.15,
                granularity: LabelGranularity::MonthDay,
            },
            // monthly for the long-term view
            TimeRange::All => RangeSpec {
                point_count: 120,
                interval_ms: 30 * 24 * 60 * 60 * 1000,
                volatility: 0.25,
                granularity: LabelGranularity::MonthYear,
            },
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sampling configuration for one time range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSpec {
    /// Number of points to synthesize for this range.
    pub point_count: usize,

    /// Spacing between consecutive samples, in milliseconds.
    pub interval_ms: i64,

    /// Scale factor on price movement magnitude, in (0, 1].
    pub volatility: f64,

    /// How timestamps for this range should be rendered.
    pub granularity: LabelGranularity,
}

/// Timestamp display granularity. Formatting is a presentation concern;
/// series points carry real instants and the frontend (or a caller that
/// needs strings) picks the label via the range's granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelGranularity {
    /// "HH:MM", intraday
    HourMinute,
    /// "MM/DD", daily and weekly sampled ranges
    MonthDay,
    /// "MM/YY", the long-term view
    MonthYear,
}

impl LabelGranularity {
    /// Render a timestamp as a chart axis label at this granularity.
    pub fn format(&self, timestamp: DateTime<Utc>) -> String {
        match self {
            LabelGranularity::HourMinute => timestamp.format("%H:%M").to_string(),
            LabelGranularity::MonthDay => timestamp.format("%m/%d").to_string(),
            LabelGranularity::MonthYear => timestamp.format("%m/%y").to_string(),
        }
    }
}
