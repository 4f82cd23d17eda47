use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::quote::Quote;

/// Trait abstraction for the remote quote feed.
///
/// The dashboard treats quote fetching as opaque: whatever backs it (an
/// edge function, a broker API, a test fixture) implements this trait and
/// the rest of the codebase is untouched when it changes.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch current quotes for the given symbols.
    ///
    /// Returning fewer quotes than symbols is not an error; symbols the
    /// feed doesn't know are simply absent from the result.
    async fn fetch_quotes(&self, symbols: &[String]) -> Result<Vec<Quote>, CoreError>;
}
