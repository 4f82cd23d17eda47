use serde::{Deserialize, Serialize};

/// A real-time quote for one symbol, as returned by the remote
/// stock-data endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub change: f64,

    #[serde(rename = "changePercent")]
    pub change_percent: f64,

    /// Zero when the feed omits volume; the merge keeps the prior value.
    #[serde(default)]
    pub volume: u64,

    #[serde(rename = "previousClose", default)]
    pub previous_close: Option<f64>,

    #[serde(rename = "latestTradingDay", default)]
    pub latest_trading_day: Option<String>,
}
