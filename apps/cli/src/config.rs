//! The tracked dashboard's static configuration.

use tickerboard_market_data::TickerConfig;
use tickerboard_refresh::RefreshConfig;

/// Ticker table, currency memberships, and the OTC quote link for the
/// dashboard this tool maintains.
///
/// LYC trades on the ASX (displayed in A$) while its US OTC listing LYSCF
/// quotes in dollars; the link regenerates the hand-written OTC note on
/// LYC_AX's 52-week range from LYSCF's spot price.
pub fn reference_dashboard() -> RefreshConfig {
    let tickers = vec![
        TickerConfig::new("MP", "MP"),
        TickerConfig::new("LYSCF", "LYSCF"),
        TickerConfig::new("LYC_AX", "LYC.AX"),
        TickerConfig::new("UUUU", "UUUU"),
        TickerConfig::new("USAR", "USAR"),
        TickerConfig::new("CRML", "CRML"),
        TickerConfig::new("IRDM", "IRDM"),
        TickerConfig::new("LHX", "LHX"),
        TickerConfig::new("MTRN", "MTRN"),
    ];

    let mut config = RefreshConfig {
        tickers,
        ..Default::default()
    };
    config.aud_tickers.insert("LYC_AX".to_string());
    config
        .otc_quote_links
        .insert("LYC_AX".to_string(), "LYSCF".to_string());
    config
}
