use serde::{Deserialize, Serialize};

use super::types::FieldKind;

/// Raw values fetched for one ticker, straight from the provider.
///
/// Values are the provider's `raw` JSON numbers; no rounding or formatting
/// happens here. Every field is optional: providers routinely omit
/// fundamentals for small caps, foreign listings, and pre-revenue
/// companies, and an absent value just means the matching document field
/// is left alone.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TickerSnapshot {
    /// Current spot price
    pub price: Option<f64>,

    /// Market capitalization
    pub market_cap: Option<f64>,

    /// Trailing twelve-month revenue
    pub revenue: Option<f64>,

    /// Net income attributable to common shareholders
    pub net_income: Option<f64>,

    /// 52-week high
    pub week52_high: Option<f64>,

    /// 52-week low
    pub week52_low: Option<f64>,

    /// Analyst consensus target price
    pub target_price: Option<f64>,

    /// Forward price/earnings multiple
    pub forward_pe: Option<f64>,
}

impl TickerSnapshot {
    /// Look up a field by kind.
    pub fn get(&self, field: FieldKind) -> Option<f64> {
        match field {
            FieldKind::Price => self.price,
            FieldKind::MarketCap => self.market_cap,
            FieldKind::Revenue => self.revenue,
            FieldKind::NetIncome => self.net_income,
            FieldKind::Week52High => self.week52_high,
            FieldKind::Week52Low => self.week52_low,
            FieldKind::TargetPrice => self.target_price,
            FieldKind::ForwardPe => self.forward_pe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_kind() {
        let snapshot = TickerSnapshot {
            price: Some(42.5),
            net_income: Some(-3_200_000.0),
            ..Default::default()
        };
        assert_eq!(snapshot.get(FieldKind::Price), Some(42.5));
        assert_eq!(snapshot.get(FieldKind::NetIncome), Some(-3_200_000.0));
        assert_eq!(snapshot.get(FieldKind::Revenue), None);
    }
}
