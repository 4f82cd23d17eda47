pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use chrono::NaiveDateTime;

use errors::CoreError;
use models::range::TimeRange;
use models::series::{ChartCache, SeriesPoint};
use models::stock::{default_universe, StockSummary};
use providers::http::HttpQuoteProvider;
use providers::traits::QuoteProvider;
use services::chart_service::ChartService;
use services::market_hours::{self, MarketStatus, SessionAlert};
use services::quote_service::QuoteService;

/// Main entry point for the Bull/Bear dashboard core library.
/// Holds the stock universe, the process-wide chart cache, and the
/// services that operate on them.
#[must_use]
pub struct MarketDashboard {
    stocks: Vec<StockSummary>,
    chart_cache: ChartCache,
    chart_service: ChartService,
    quote_service: QuoteService,
}

impl std::fmt::Debug for MarketDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketDashboard")
            .field("stocks", &self.stocks.len())
            .field("cached_series", &self.chart_cache.entry_count())
            .finish()
    }
}

impl MarketDashboard {
    /// Dashboard over the built-in Nifty universe.
    pub fn new(quote_provider: Box<dyn QuoteProvider>) -> Self {
        Self::with_stocks(default_universe(), quote_provider)
    }

    /// Dashboard over the built-in universe, fetching quotes from the
    /// stock-data HTTP endpoint at `base_url`.
    pub fn with_endpoint(base_url: impl Into<String>) -> Self {
        Self::new(Box::new(HttpQuoteProvider::new(base_url)))
    }

    /// Dashboard over a custom stock universe.
    pub fn with_stocks(stocks: Vec<StockSummary>, quote_provider: Box<dyn QuoteProvider>) -> Self {
        Self {
            stocks,
            chart_cache: ChartCache::new(),
            chart_service: ChartService::new(),
            quote_service: QuoteService::new(quote_provider),
        }
    }

    /// Dashboard with an explicit chart service (seeded synthesizer,
    /// test clock). The cache still starts empty.
    pub fn with_chart_service(
        stocks: Vec<StockSummary>,
        quote_provider: Box<dyn QuoteProvider>,
        chart_service: ChartService,
    ) -> Self {
        Self {
            stocks,
            chart_cache: ChartCache::new(),
            chart_service,
            quote_service: QuoteService::new(quote_provider),
        }
    }

    // ── Stocks ──────────────────────────────────────────────────────

    /// All stock rows, in universe order.
    #[must_use]
    pub fn stocks(&self) -> &[StockSummary] {
        &self.stocks
    }

    /// Look up a stock row by symbol (case-insensitive).
    #[must_use]
    pub fn get_stock(&self, symbol: &str) -> Option<&StockSummary> {
        let upper = symbol.to_uppercase();
        self.stocks.iter().find(|s| s.symbol == upper)
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Get the chart series for a stock and a UI range label ("1D",
    /// "1W", "1M", "3M", "1Y", "ALL").
    ///
    /// The base price and trend direction come from the stock's current
    /// row, so a chart requested right after a quote refresh anchors on
    /// the refreshed price (once the cached series for that key expires).
    pub fn chart_series(
        &mut self,
        symbol: &str,
        range_label: &str,
    ) -> Result<Vec<SeriesPoint>, CoreError> {
        let range = TimeRange::from_label(range_label)?;
        let stock = self
            .get_stock(symbol)
            .ok_or_else(|| CoreError::UnknownSymbol(symbol.to_string()))?;
        let base_price = stock.price;
        let trend_bias = stock.trend_bias();

        Ok(self.chart_service.get_series(
            &mut self.chart_cache,
            symbol,
            range,
            base_price,
            trend_bias,
        ))
    }

    /// Get a chart series with explicit base price and trend, bypassing
    /// the stock universe (e.g., for symbols shown from search results).
    pub fn chart_series_for(
        &mut self,
        symbol: &str,
        range_label: &str,
        base_price: f64,
        trend_bias: bool,
    ) -> Result<Vec<SeriesPoint>, CoreError> {
        let range = TimeRange::from_label(range_label)?;
        Ok(self
            .chart_service
            .get_series(&mut self.chart_cache, symbol, range, base_price, trend_bias))
    }

    /// Render axis labels for a series at the range's granularity.
    #[must_use]
    pub fn chart_labels(&self, range: TimeRange, series: &[SeriesPoint]) -> Vec<String> {
        let granularity = range.spec().granularity;
        series
            .iter()
            .map(|p| granularity.format(p.timestamp))
            .collect()
    }

    // ── Quotes ──────────────────────────────────────────────────────

    /// Refresh all stock rows from the quote provider.
    /// Returns the number of rows updated.
    pub async fn refresh_quotes(&mut self) -> Result<usize, CoreError> {
        let now = chrono::Utc::now();
        self.quote_service.refresh(&mut self.stocks, now).await
    }

    // ── Market Hours ────────────────────────────────────────────────

    /// Session status at an exchange-local time.
    #[must_use]
    pub fn market_status(&self, local: NaiveDateTime) -> MarketStatus {
        market_hours::session_status(local)
    }

    /// The open/close alert due at an exchange-local time, if any.
    #[must_use]
    pub fn pending_alert(&self, local: NaiveDateTime) -> Option<SessionAlert> {
        market_hours::session_alert(local)
    }

    // ── Cache Management ────────────────────────────────────────────

    /// Number of (symbol, range) series currently cached.
    #[must_use]
    pub fn cache_entry_count(&self) -> usize {
        self.chart_cache.entry_count()
    }

    /// Drop all cached chart series; the next request per key
    /// re-synthesizes.
    pub fn cache_clear(&mut self) {
        self.chart_cache.clear();
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export the stock universe as pretty-printed JSON (for debugging
    /// or frontend bootstrap).
    pub fn snapshot_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.stocks)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize stocks: {e}")))
    }
}
