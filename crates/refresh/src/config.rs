//! Engine configuration.

use std::collections::{HashMap, HashSet};

use tickerboard_market_data::{TickerConfig, TickerId};

use crate::format::CurrencyStyle;

/// Immutable configuration for one refresh run.
///
/// Built once by the caller and passed into [`Engine`](crate::Engine) by
/// reference, so several documents can be processed without any
/// cross-run state.
#[derive(Clone, Debug, Default)]
pub struct RefreshConfig {
    /// The ticker table: display ids and the provider symbols they map to.
    pub tickers: Vec<TickerConfig>,

    /// Tickers whose amounts are displayed with the A$ prefix.
    pub aud_tickers: HashSet<TickerId>,

    /// Links a ticker to the alternate-market ticker whose spot price
    /// regenerates the hand-authored "US OTC: ~$…" prefix on its 52-week
    /// range. Tickers without a link keep any such prefix verbatim.
    pub otc_quote_links: HashMap<TickerId, TickerId>,
}

impl RefreshConfig {
    /// Currency presentation for a ticker id.
    pub fn currency_style(&self, id: &str) -> CurrencyStyle {
        if self.aud_tickers.contains(id) {
            CurrencyStyle::Aud
        } else {
            CurrencyStyle::Usd
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_style_membership() {
        let mut config = RefreshConfig::default();
        config.aud_tickers.insert("LYC_AX".to_string());

        assert_eq!(config.currency_style("LYC_AX"), CurrencyStyle::Aud);
        assert_eq!(config.currency_style("MP"), CurrencyStyle::Usd);
        assert_eq!(config.currency_style("unknown"), CurrencyStyle::Usd);
    }
}
