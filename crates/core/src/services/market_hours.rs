use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Whether the exchange is currently trading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketStatus {
    Open,
    Closed,
}

impl std::fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarketStatus::Open => write!(f, "Market Open"),
            MarketStatus::Closed => write!(f, "Market Closed"),
        }
    }
}

/// A session-boundary alert, fired exactly once per boundary minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionAlert {
    Opening,
    Closing,
}

/// NSE session open: 09:15 local exchange time.
fn session_open() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 15, 0).unwrap()
}

/// NSE session close: 15:15 local exchange time.
fn session_close() -> NaiveTime {
    NaiveTime::from_hms_opt(15, 15, 0).unwrap()
}

fn is_weekend(local: NaiveDateTime) -> bool {
    matches!(local.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Session status at a given exchange-local time. Weekends are always
/// closed; weekdays trade between 09:15 (inclusive) and 15:15
/// (exclusive). Exchange holidays are out of scope.
pub fn session_status(local: NaiveDateTime) -> MarketStatus {
    if is_weekend(local) {
        return MarketStatus::Closed;
    }
    let t = local.time();
    if t >= session_open() && t < session_close() {
        MarketStatus::Open
    } else {
        MarketStatus::Closed
    }
}

/// The alert to send at a given exchange-local time, if any. Fires only
/// during the exact boundary minute (09:15 / 15:15), matching a scheduler
/// that polls once a minute.
pub fn session_alert(local: NaiveDateTime) -> Option<SessionAlert> {
    if is_weekend(local) {
        return None;
    }
    let minute_of_day = local.hour() * 60 + local.minute();
    if minute_of_day == 9 * 60 + 15 {
        Some(SessionAlert::Opening)
    } else if minute_of_day == 15 * 60 + 15 {
        Some(SessionAlert::Closing)
    } else {
        None
    }
}
