//! Provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::TickerSnapshot;

/// Trait for snapshot providers.
///
/// Implement this trait to source quotes and fundamentals from somewhere
/// other than Yahoo Finance. The refresher only ever asks one question:
/// the full snapshot for a provider symbol.
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and error
    /// messages. Should be a constant string like "YAHOO".
    fn id(&self) -> &'static str;

    /// Fetch the snapshot for one provider symbol.
    ///
    /// A snapshot is valid as long as it carries a spot price; any other
    /// field may be absent.
    async fn fetch_snapshot(&self, symbol: &str) -> Result<TickerSnapshot, MarketDataError>;
}
