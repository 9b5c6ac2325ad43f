use std::collections::HashMap;

use super::snapshot::TickerSnapshot;

/// Display identifier of a tracked ticker, as it appears in the document's
/// `data-ticker` marker attributes (e.g. "LYC_AX").
pub type TickerId = String;

/// Everything one refresh run has to work with: tickers that failed
/// retrieval are simply absent from the map.
pub type SnapshotSet = HashMap<TickerId, TickerSnapshot>;

/// One entry of the static ticker table: the display id used in marker
/// attributes and the symbol the provider understands (e.g. "LYC.AX").
#[derive(Clone, Debug)]
pub struct TickerConfig {
    pub id: TickerId,
    pub symbol: String,
}

impl TickerConfig {
    pub fn new(id: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
        }
    }
}

/// The displayed quantity kinds sourced directly from the provider.
///
/// Derived presentations (the 52-week range, the net-income sign class,
/// the timestamp stamps) are computed from these by the refresh engine and
/// have no variant here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Price,
    MarketCap,
    Revenue,
    NetIncome,
    Week52High,
    Week52Low,
    TargetPrice,
    ForwardPe,
}

impl FieldKind {
    /// The six kinds rewritten as plain text runs. The 52-week high/low are
    /// excluded: they only surface through the composite range field.
    pub const PRIMITIVE_DISPLAY: [FieldKind; 6] = [
        FieldKind::Price,
        FieldKind::MarketCap,
        FieldKind::Revenue,
        FieldKind::NetIncome,
        FieldKind::TargetPrice,
        FieldKind::ForwardPe,
    ];

    /// The `data-field` marker attribute value for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Price => "price",
            FieldKind::MarketCap => "mktcap",
            FieldKind::Revenue => "revenue",
            FieldKind::NetIncome => "net_income",
            FieldKind::Week52High => "52wk_high",
            FieldKind::Week52Low => "52wk_low",
            FieldKind::TargetPrice => "target_price",
            FieldKind::ForwardPe => "pe_forward",
        }
    }
}
