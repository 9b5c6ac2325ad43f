//! Yahoo Finance API response models.
//!
//! These models parse the quoteSummary responses. Yahoo wraps every number
//! in a detail object like `{"raw": 123.45, "fmt": "123.45"}` and sends an
//! empty object `{}` when a value is unavailable.

use serde::Deserialize;

/// Main response wrapper for the quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResponse {
    pub quote_summary: YahooQuoteSummary,
}

/// Quote summary container
#[derive(Debug, Deserialize)]
pub struct YahooQuoteSummary {
    pub result: Vec<YahooQuoteSummaryResult>,
    // Note: error field exists in the API but we handle errors via HTTP status/empty results
}

/// Individual result from the quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResult {
    pub price: Option<YahooPriceData>,
    pub summary_detail: Option<YahooSummaryDetail>,
    pub financial_data: Option<YahooFinancialData>,
    pub default_key_statistics: Option<YahooKeyStatistics>,
}

/// Price data module
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooPriceData {
    pub regular_market_price: Option<YahooPriceDetail>,
}

/// Price detail with raw and formatted values
#[derive(Debug, Deserialize, Clone)]
pub struct YahooPriceDetail {
    pub raw: Option<f64>,
    // Note: fmt field exists but we only use raw values
}

/// summaryDetail module (valuation and trading range metrics)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooSummaryDetail {
    pub market_cap: Option<YahooPriceDetail>,
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<YahooPriceDetail>,
    pub fifty_two_week_high: Option<YahooPriceDetail>,
    pub fifty_two_week_low: Option<YahooPriceDetail>,
}

/// financialData module (analyst and income statement metrics)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooFinancialData {
    pub current_price: Option<YahooPriceDetail>,
    pub target_mean_price: Option<YahooPriceDetail>,
    pub total_revenue: Option<YahooPriceDetail>,
}

/// defaultKeyStatistics module
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooKeyStatistics {
    pub net_income_to_common: Option<YahooPriceDetail>,
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<YahooPriceDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_price_detail() {
        let json = r#"{"raw": 150.25, "fmt": "150.25"}"#;
        let detail: YahooPriceDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.raw, Some(150.25));
    }

    #[test]
    fn test_deserialize_price_detail_empty_object() {
        // Yahoo sends {} for fields with no data
        let json = r#"{}"#;
        let detail: YahooPriceDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.raw, None);
    }

    #[test]
    fn test_deserialize_financial_data() {
        let json = r#"{
            "currentPrice": {"raw": 62.11, "fmt": "62.11"},
            "targetMeanPrice": {"raw": 75.0, "fmt": "75.00"},
            "totalRevenue": {"raw": 232700000, "fmt": "232.7M"}
        }"#;
        let data: YahooFinancialData = serde_json::from_str(json).unwrap();
        assert_eq!(data.current_price.as_ref().and_then(|d| d.raw), Some(62.11));
        assert_eq!(
            data.target_mean_price.as_ref().and_then(|d| d.raw),
            Some(75.0)
        );
        assert_eq!(
            data.total_revenue.as_ref().and_then(|d| d.raw),
            Some(232_700_000.0)
        );
    }

    #[test]
    fn test_deserialize_key_statistics_forward_pe_casing() {
        // forwardPE does not follow Yahoo's usual camelCase and needs a rename
        let json = r#"{
            "netIncomeToCommon": {"raw": -116600000},
            "forwardPE": {"raw": 45.2}
        }"#;
        let stats: YahooKeyStatistics = serde_json::from_str(json).unwrap();
        assert_eq!(
            stats.net_income_to_common.as_ref().and_then(|d| d.raw),
            Some(-116_600_000.0)
        );
        assert_eq!(stats.forward_pe.as_ref().and_then(|d| d.raw), Some(45.2));
    }

    #[test]
    fn test_deserialize_summary_detail_partial() {
        let json = r#"{
            "marketCap": {"raw": 10860000000, "fmt": "10.86B"},
            "fiftyTwoWeekHigh": {},
            "fiftyTwoWeekLow": {"raw": 27.31, "fmt": "27.31"}
        }"#;
        let detail: YahooSummaryDetail = serde_json::from_str(json).unwrap();
        assert_eq!(
            detail.market_cap.as_ref().and_then(|d| d.raw),
            Some(10_860_000_000.0)
        );
        assert_eq!(detail.fifty_two_week_high.as_ref().and_then(|d| d.raw), None);
        assert_eq!(
            detail.fifty_two_week_low.as_ref().and_then(|d| d.raw),
            Some(27.31)
        );
        assert_eq!(detail.forward_pe.as_ref().and_then(|d| d.raw), None);
    }

    #[test]
    fn test_deserialize_empty_result() {
        let json = r#"{"quoteSummary": {"result": []}}"#;
        let response: YahooQuoteSummaryResponse = serde_json::from_str(json).unwrap();
        assert!(response.quote_summary.result.is_empty());
    }
}
