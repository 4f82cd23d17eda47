use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::QuoteProvider;
use crate::errors::CoreError;
use crate::models::quote::Quote;

/// The feed handles at most this many symbols per request; larger
/// batches are split client-side.
const MAX_SYMBOLS_PER_REQUEST: usize = 5;

/// Quote provider backed by the dashboard's stock-data HTTP endpoint.
///
/// Protocol: POST `{base_url}/stock-data` with `{"symbols": [...]}`,
/// response `{"results": [...]}` where each element is either a quote or
/// an error placeholder for a symbol the upstream feed couldn't serve.
/// Placeholders are skipped; a partial result is not a failure.
pub struct HttpQuoteProvider {
    client: Client,
    base_url: String,
}

impl HttpQuoteProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

// ── Wire types ──────────────────────────────────────────────────────

#[derive(Serialize)]
struct QuoteRequest<'a> {
    symbols: &'a [String],
}

#[derive(Deserialize)]
struct QuoteResponse {
    results: Vec<serde_json::Value>,
}

#[async_trait]
impl QuoteProvider for HttpQuoteProvider {
    fn name(&self) -> &str {
        "StockDataEndpoint"
    }

    async fn fetch_quotes(&self, symbols: &[String]) -> Result<Vec<Quote>, CoreError> {
        let url = format!("{}/stock-data", self.base_url);
        let mut quotes = Vec::with_capacity(symbols.len());

        for batch in symbols.chunks(MAX_SYMBOLS_PER_REQUEST) {
            let resp: QuoteResponse = self
                .client
                .post(&url)
                .json(&QuoteRequest { symbols: batch })
                .send()
                .await?
                .json()
                .await
                .map_err(|e| CoreError::Api {
                    provider: "StockDataEndpoint".into(),
                    message: format!("Failed to parse quote response: {e}"),
                })?;

            // Error placeholders lack the price fields and fail to parse
            // as quotes; drop them and keep the rest.
            quotes.extend(
                resp.results
                    .into_iter()
                    .filter_map(|value| serde_json::from_value::<Quote>(value).ok()),
            );
        }

        Ok(quotes)
    }
}
