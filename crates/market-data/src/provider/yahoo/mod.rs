//! Yahoo Finance snapshot provider.
//!
//! Fundamentals come from the quoteSummary v10 API, which needs the
//! cookie/crumb authentication dance. The spot price is taken from the
//! `financialData` module, falling back to the `price` module and, as a
//! last resort, to the chart API via the yahoo_finance_api connector.

mod models;

use std::sync::RwLock;

use async_trait::async_trait;
use lazy_static::lazy_static;
use reqwest::{header, StatusCode};
use tracing::debug;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::TickerSnapshot;
use crate::provider::SnapshotProvider;

use models::{YahooQuoteSummaryResponse, YahooQuoteSummaryResult};

const QUOTE_SUMMARY_MODULES: &str = "price,summaryDetail,financialData,defaultKeyStatistics";

// ============================================================================
// Crumb/Cookie Authentication
// ============================================================================

/// Cached Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

lazy_static! {
    /// Global cache for the Yahoo authentication crumb
    static ref YAHOO_CRUMB: RwLock<Option<CrumbData>> = RwLock::default();
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance snapshot provider.
pub struct YahooProvider {
    client: reqwest::Client,
    connector: yahoo::YahooConnector,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector = yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
            provider: "YAHOO".to_string(),
            message: format!("Failed to initialize Yahoo connector: {}", e),
        })?;
        Ok(Self {
            client: reqwest::Client::new(),
            connector,
        })
    }

    // ========================================================================
    // Crumb/Cookie Authentication
    // ========================================================================

    /// Ensure we have a valid Yahoo authentication crumb.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        {
            let guard = YAHOO_CRUMB.read().unwrap();
            if let Some(crumb) = guard.as_ref() {
                return Ok(crumb.clone());
            }
        }

        self.fetch_crumb().await
    }

    /// Fetch a new Yahoo authentication crumb.
    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        // Step 1: Get cookie from fc.yahoo.com
        let response = self.client.get("https://fc.yahoo.com").send().await?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: "Failed to parse Yahoo cookie".to_string(),
            })?;

        // Step 2: Get crumb using cookie
        let crumb = self
            .client
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(
                header::USER_AGENT,
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            )
            .header(header::COOKIE, &cookie)
            .send()
            .await?
            .text()
            .await?;

        let crumb_data = CrumbData { cookie, crumb };

        let mut guard = YAHOO_CRUMB.write().unwrap();
        *guard = Some(crumb_data.clone());

        Ok(crumb_data)
    }

    /// Clear the cached crumb (used when authentication fails)
    fn clear_crumb(&self) {
        let mut guard = YAHOO_CRUMB.write().unwrap();
        *guard = None;
    }

    // ========================================================================
    // Snapshot Fetching
    // ========================================================================

    /// Fetch the quoteSummary result for a symbol, re-authenticating once
    /// if the cached crumb has gone stale.
    async fn quote_summary(&self, symbol: &str) -> Result<YahooQuoteSummaryResult, MarketDataError> {
        let mut retried = false;
        loop {
            let crumb_data = self.ensure_crumb().await?;

            let url = format!(
                "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{}?modules={}&crumb={}",
                symbol, QUOTE_SUMMARY_MODULES, crumb_data.crumb
            );

            let response = self
                .client
                .get(&url)
                .header(
                    header::USER_AGENT,
                    "Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.2; .NET CLR 1.0.3705;)",
                )
                .header(header::COOKIE, &crumb_data.cookie)
                .header("Crumb", &crumb_data.crumb)
                .send()
                .await?;

            let status = response.status();
            if (status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN) && !retried {
                debug!("Yahoo crumb rejected for {}, re-authenticating", symbol);
                self.clear_crumb();
                retried = true;
                continue;
            }
            if status == StatusCode::NOT_FOUND {
                return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
            }
            if !status.is_success() {
                return Err(MarketDataError::ProviderError {
                    provider: "YAHOO".to_string(),
                    message: format!("quoteSummary returned HTTP {}", status),
                });
            }

            let parsed: YahooQuoteSummaryResponse = response.json().await?;
            return parsed
                .quote_summary
                .result
                .into_iter()
                .next()
                .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()));
        }
    }

    /// Last-resort spot price from the chart API.
    async fn chart_price(&self, symbol: &str) -> Option<f64> {
        match self.connector.get_latest_quotes(symbol, "1d").await {
            Ok(response) => response.last_quote().ok().map(|q| q.close),
            Err(err) => {
                debug!("Chart price fallback failed for {}: {}", symbol, err);
                None
            }
        }
    }
}

/// Map a quoteSummary result onto the snapshot the refresher consumes.
fn snapshot_from(result: YahooQuoteSummaryResult) -> TickerSnapshot {
    let price = result.price.as_ref();
    let detail = result.summary_detail.as_ref();
    let financial = result.financial_data.as_ref();
    let stats = result.default_key_statistics.as_ref();

    TickerSnapshot {
        // financialData.currentPrice is fresher when present
        price: financial
            .and_then(|f| f.current_price.as_ref())
            .and_then(|d| d.raw)
            .or_else(|| {
                price
                    .and_then(|p| p.regular_market_price.as_ref())
                    .and_then(|d| d.raw)
            }),
        market_cap: detail.and_then(|d| d.market_cap.as_ref()).and_then(|d| d.raw),
        revenue: financial
            .and_then(|f| f.total_revenue.as_ref())
            .and_then(|d| d.raw),
        net_income: stats
            .and_then(|s| s.net_income_to_common.as_ref())
            .and_then(|d| d.raw),
        week52_high: detail
            .and_then(|d| d.fifty_two_week_high.as_ref())
            .and_then(|d| d.raw),
        week52_low: detail
            .and_then(|d| d.fifty_two_week_low.as_ref())
            .and_then(|d| d.raw),
        target_price: financial
            .and_then(|f| f.target_mean_price.as_ref())
            .and_then(|d| d.raw),
        forward_pe: stats
            .and_then(|s| s.forward_pe.as_ref())
            .and_then(|d| d.raw)
            .or_else(|| detail.and_then(|d| d.forward_pe.as_ref()).and_then(|d| d.raw)),
    }
}

#[async_trait]
impl SnapshotProvider for YahooProvider {
    fn id(&self) -> &'static str {
        "YAHOO"
    }

    async fn fetch_snapshot(&self, symbol: &str) -> Result<TickerSnapshot, MarketDataError> {
        let result = self.quote_summary(symbol).await?;
        let mut snapshot = snapshot_from(result);

        if snapshot.price.is_none() {
            snapshot.price = self.chart_price(symbol).await;
        }
        if snapshot.price.is_none() {
            return Err(MarketDataError::ValidationFailed {
                message: format!("{}: no usable spot price", symbol),
            });
        }

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::models::YahooQuoteSummaryResponse;
    use super::*;

    fn parse_result(json: &str) -> YahooQuoteSummaryResult {
        let parsed: YahooQuoteSummaryResponse = serde_json::from_str(json).unwrap();
        parsed.quote_summary.result.into_iter().next().unwrap()
    }

    #[test]
    fn test_snapshot_prefers_current_price() {
        let result = parse_result(
            r#"{"quoteSummary": {"result": [{
                "price": {"regularMarketPrice": {"raw": 10.0}},
                "financialData": {"currentPrice": {"raw": 10.5}}
            }]}}"#,
        );
        let snapshot = snapshot_from(result);
        assert_eq!(snapshot.price, Some(10.5));
    }

    #[test]
    fn test_snapshot_falls_back_to_regular_market_price() {
        let result = parse_result(
            r#"{"quoteSummary": {"result": [{
                "price": {"regularMarketPrice": {"raw": 10.0}},
                "financialData": {}
            }]}}"#,
        );
        let snapshot = snapshot_from(result);
        assert_eq!(snapshot.price, Some(10.0));
    }

    #[test]
    fn test_snapshot_collects_fundamentals() {
        let result = parse_result(
            r#"{"quoteSummary": {"result": [{
                "price": {"regularMarketPrice": {"raw": 62.11}},
                "summaryDetail": {
                    "marketCap": {"raw": 10860000000},
                    "fiftyTwoWeekHigh": {"raw": 79.94},
                    "fiftyTwoWeekLow": {"raw": 27.31}
                },
                "financialData": {
                    "currentPrice": {"raw": 62.11},
                    "totalRevenue": {"raw": 232700000},
                    "targetMeanPrice": {"raw": 75.0}
                },
                "defaultKeyStatistics": {
                    "netIncomeToCommon": {"raw": -116600000},
                    "forwardPE": {"raw": 45.2}
                }
            }]}}"#,
        );
        let snapshot = snapshot_from(result);
        assert_eq!(snapshot.market_cap, Some(10_860_000_000.0));
        assert_eq!(snapshot.revenue, Some(232_700_000.0));
        assert_eq!(snapshot.net_income, Some(-116_600_000.0));
        assert_eq!(snapshot.week52_high, Some(79.94));
        assert_eq!(snapshot.week52_low, Some(27.31));
        assert_eq!(snapshot.target_price, Some(75.0));
        assert_eq!(snapshot.forward_pe, Some(45.2));
    }

    #[test]
    fn test_snapshot_missing_modules() {
        let result = parse_result(r#"{"quoteSummary": {"result": [{}]}}"#);
        let snapshot = snapshot_from(result);
        assert_eq!(snapshot.price, None);
        assert_eq!(snapshot.market_cap, None);
        assert_eq!(snapshot.forward_pe, None);
    }
}
