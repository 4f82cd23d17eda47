use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::quote::Quote;

/// One row of the dashboard's stock universe: the static card data plus
/// the latest known price. The chart layer reads `price` as the base
/// price for synthesis and `trend_bias()` as the drift direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSummary {
    /// Ticker symbol, uppercased (e.g., "TCS", "INFY")
    pub symbol: String,

    /// Human-readable company name
    pub name: String,

    /// Latest known price
    pub price: f64,

    /// Absolute change since previous close
    pub change: f64,

    /// Percentage change since previous close
    pub change_percent: f64,

    /// Traded volume
    pub volume: u64,

    /// Display market cap (e.g., "6.18L Cr")
    pub market_cap: String,

    /// 52-week high
    pub high_52w: f64,

    /// 52-week low
    pub low_52w: f64,

    /// When a real-time quote was last merged in; `None` until the first
    /// refresh succeeds.
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl StockSummary {
    /// Whether the synthesized chart for this stock should drift upward.
    /// Flat is treated as positive, matching the green/red card coloring.
    pub fn trend_bias(&self) -> bool {
        self.change >= 0.0
    }

    /// Merge a real-time quote into this row, stamping the refresh time.
    /// A zero-volume quote keeps the previously known volume.
    pub fn apply_quote(&mut self, quote: &Quote, now: DateTime<Utc>) {
        self.price = quote.price;
        self.change = quote.change;
        self.change_percent = quote.change_percent;
        if quote.volume > 0 {
            self.volume = quote.volume;
        }
        self.last_updated = Some(now);
    }
}

/// The built-in Nifty universe the dashboard serves, with last known
/// prices as seed data. Real-time refreshes overwrite these in place.
pub fn default_universe() -> Vec<StockSummary> {
    fn row(
        symbol: &str,
        name: &str,
        price: f64,
        change: f64,
        change_percent: f64,
        volume: u64,
        market_cap: &str,
        high_52w: f64,
        low_52w: f64,
    ) -> StockSummary {
        StockSummary {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            change,
            change_percent,
            volume,
            market_cap: market_cap.to_string(),
            high_52w,
            low_52w,
            last_updated: None,
        }
    }

    vec![
        row("RELIANCE", "Reliance Industries", 1456.40, 0.15, 0.15, 9_036_695, "19.44L Cr", 1608.80, 1114.85),
        row("HDFCBANK", "HDFC Bank", 1934.70, 0.05, 0.05, 7_934_005, "12.56L Cr", 1978.90, 1435.50),
        row("TCS", "Tata Consultancy Services", 3561.30, -18.52, -0.52, 1_666_727, "6.18L Cr", 4592.25, 3056.05),
        row("BHARTIARTL", "Bharti Airtel", 1814.00, -53.20, -2.85, 10_000_000, "9.32L Cr", 1917.00, 1219.05),
        row("ICICIBANK", "ICICI Bank", 1454.00, 3.20, 0.22, 6_439_208, "7.28L Cr", 1456.50, 1051.05),
        row("SBIN", "State Bank of India", 792.10, -15.68, -1.94, 10_000_000, "6.02L Cr", 912.00, 680.00),
        row("INFY", "Infosys", 1589.90, -23.04, -1.43, 4_576_751, "2.67L Cr", 2006.45, 1307.00),
        row("BAJFINANCE", "Bajaj Finance", 9167.00, -21.08, -0.23, 625_192, "4.08L Cr", 9660.00, 6375.70),
        row("HINDUNILVR", "Hindustan Unilever", 2381.40, 26.18, 1.11, 1_473_000, "3.48L Cr", 3035.00, 2136.00),
        row("ITC", "ITC", 435.70, 3.03, 0.70, 10_000_000, "1.94L Cr", 499.96, 381.10),
    ]
}
