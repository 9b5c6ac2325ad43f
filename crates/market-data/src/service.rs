//! Snapshot retrieval over the ticker table.

use tracing::{info, warn};

use crate::models::{SnapshotSet, TickerConfig};
use crate::provider::SnapshotProvider;

/// Fetch snapshots for every configured ticker.
///
/// Retrieval is sequential and failures are isolated per symbol: a ticker
/// that errors is logged and left out of the result, it never aborts the
/// rest of the run. An empty result set is not an error here; the caller
/// decides whether that is fatal.
pub async fn fetch_all(provider: &dyn SnapshotProvider, tickers: &[TickerConfig]) -> SnapshotSet {
    let mut snapshots = SnapshotSet::new();

    for ticker in tickers {
        info!("Fetching {} (as {})", ticker.symbol, ticker.id);
        match provider.fetch_snapshot(&ticker.symbol).await {
            Ok(snapshot) => {
                if let Some(price) = snapshot.price {
                    info!("  {}: {:.2}", ticker.symbol, price);
                }
                snapshots.insert(ticker.id.clone(), snapshot);
            }
            Err(err) => {
                warn!("  {}: {}", ticker.symbol, err);
            }
        }
    }

    snapshots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MarketDataError;
    use crate::models::TickerSnapshot;
    use async_trait::async_trait;

    /// Provider that knows a fixed set of symbols and fails on the rest.
    struct FixtureProvider {
        known: Vec<(&'static str, f64)>,
    }

    #[async_trait]
    impl SnapshotProvider for FixtureProvider {
        fn id(&self) -> &'static str {
            "FIXTURE"
        }

        async fn fetch_snapshot(
            &self,
            symbol: &str,
        ) -> Result<TickerSnapshot, MarketDataError> {
            match self.known.iter().find(|(s, _)| *s == symbol) {
                Some((_, price)) => Ok(TickerSnapshot {
                    price: Some(*price),
                    ..Default::default()
                }),
                None => Err(MarketDataError::SymbolNotFound(symbol.to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_fetch_all_isolates_failures() {
        let provider = FixtureProvider {
            known: vec![("MP", 62.11), ("LYC.AX", 13.40)],
        };
        let tickers = vec![
            TickerConfig::new("MP", "MP"),
            TickerConfig::new("BAD", "NOPE"),
            TickerConfig::new("LYC_AX", "LYC.AX"),
        ];

        let snapshots = fetch_all(&provider, &tickers).await;

        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots["MP"].price, Some(62.11));
        assert_eq!(snapshots["LYC_AX"].price, Some(13.40));
        assert!(!snapshots.contains_key("BAD"));
    }

    #[tokio::test]
    async fn test_fetch_all_keys_by_display_id() {
        let provider = FixtureProvider {
            known: vec![("LYC.AX", 13.40)],
        };
        let tickers = vec![TickerConfig::new("LYC_AX", "LYC.AX")];

        let snapshots = fetch_all(&provider, &tickers).await;

        // The map is keyed by the marker id, not the provider symbol
        assert!(snapshots.contains_key("LYC_AX"));
        assert!(!snapshots.contains_key("LYC.AX"));
    }
}
