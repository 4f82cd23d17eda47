use chrono::{DateTime, Utc};
use log::warn;
use std::collections::HashMap;

use crate::errors::CoreError;
use crate::models::quote::Quote;
use crate::models::stock::StockSummary;
use crate::providers::traits::QuoteProvider;

/// Refreshes stock summaries with real-time quotes from a provider.
///
/// The provider is the opaque remote integration; this service owns only
/// the merge: quotes are matched to rows by symbol, matched rows get
/// price/change/volume updated and a refresh timestamp, unmatched rows
/// are left untouched (the dashboard keeps showing the last known data).
pub struct QuoteService {
    provider: Box<dyn QuoteProvider>,
}

impl QuoteService {
    pub fn new(provider: Box<dyn QuoteProvider>) -> Self {
        Self { provider }
    }

    /// Fetch quotes for every symbol in `stocks` and merge them in.
    /// Returns the number of rows updated. Fetch errors propagate; a
    /// partial quote list is not an error.
    pub async fn refresh(
        &self,
        stocks: &mut [StockSummary],
        now: DateTime<Utc>,
    ) -> Result<usize, CoreError> {
        let symbols: Vec<String> = stocks.iter().map(|s| s.symbol.clone()).collect();
        let quotes = self.provider.fetch_quotes(&symbols).await?;
        Ok(Self::merge(stocks, &quotes, now))
    }

    /// Merge already-fetched quotes into stock rows by symbol.
    pub fn merge(stocks: &mut [StockSummary], quotes: &[Quote], now: DateTime<Utc>) -> usize {
        let by_symbol: HashMap<&str, &Quote> =
            quotes.iter().map(|q| (q.symbol.as_str(), q)).collect();

        let mut updated = 0;
        for stock in stocks.iter_mut() {
            if let Some(quote) = by_symbol.get(stock.symbol.as_str()) {
                stock.apply_quote(quote, now);
                updated += 1;
            }
        }

        if updated < quotes.len() {
            warn!(
                "{} quote(s) had no matching stock row",
                quotes.len() - updated
            );
        }
        updated
    }
}
