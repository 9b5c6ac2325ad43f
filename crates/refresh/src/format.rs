//! Display formatting for raw values.
//!
//! All functions here are pure; the exact output shapes are load-bearing
//! because re-applying the engine must reproduce the existing text
//! byte-for-byte.

use tickerboard_market_data::FieldKind;

/// Which currency prefix a ticker's amounts carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurrencyStyle {
    Usd,
    Aud,
}

impl CurrencyStyle {
    pub fn prefix(self) -> &'static str {
        match self {
            CurrencyStyle::Usd => "$",
            CurrencyStyle::Aud => "A$",
        }
    }
}

/// Scale a large number to a human-readable magnitude: 10.86B, 232.7M.
///
/// Trillions and billions keep two decimals, millions and thousands one,
/// anything below a thousand is an integer.
pub fn human_scale(n: f64) -> String {
    let magnitude = n.abs();
    if magnitude >= 1e12 {
        format!("{:.2}T", n / 1e12)
    } else if magnitude >= 1e9 {
        format!("{:.2}B", n / 1e9)
    } else if magnitude >= 1e6 {
        format!("{:.1}M", n / 1e6)
    } else if magnitude >= 1e3 {
        format!("{:.1}K", n / 1e3)
    } else {
        format!("{:.0}", n)
    }
}

/// Format a price: currency prefix, thousands-grouped, two decimals.
pub fn price(value: f64, currency: CurrencyStyle) -> String {
    format!("{}{}", currency.prefix(), group_thousands(&format!("{:.2}", value)))
}

/// Insert thousands separators into an already-formatted decimal string.
fn group_thousands(formatted: &str) -> String {
    let (number, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted, None),
    };
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format a raw value for display, matching the document's hand-written
/// conventions for each field kind.
pub fn format_value(value: f64, field: FieldKind, currency: CurrencyStyle) -> String {
    let prefix = currency.prefix();

    match field {
        FieldKind::Price | FieldKind::TargetPrice | FieldKind::Week52High | FieldKind::Week52Low => {
            price(value, currency)
        }

        FieldKind::MarketCap => format!("{}{}", prefix, human_scale(value)),

        // Pre-revenue companies show a bare zero, not "0.0K"
        FieldKind::Revenue => {
            if value == 0.0 {
                format!("{}0", prefix)
            } else {
                format!("{}{}", prefix, human_scale(value))
            }
        }

        // The sign leads the prefix: -$5M, never $-5M
        FieldKind::NetIncome => {
            if value < 0.0 {
                format!("-{}{}", prefix, human_scale(value.abs()))
            } else {
                format!("{}{}", prefix, human_scale(value))
            }
        }

        FieldKind::ForwardPe => format!("{:.1}x", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_scale_magnitudes() {
        assert_eq!(human_scale(2_800_000_000_000.0), "2.80T");
        assert_eq!(human_scale(12_500_000_000.0), "12.50B");
        assert_eq!(human_scale(232_700_000.0), "232.7M");
        assert_eq!(human_scale(45_300.0), "45.3K");
        assert_eq!(human_scale(870.0), "870");
    }

    #[test]
    fn test_price_grouping() {
        assert_eq!(price(5.1, CurrencyStyle::Usd), "$5.10");
        assert_eq!(price(1234.5, CurrencyStyle::Usd), "$1,234.50");
        assert_eq!(price(1_000_000.0, CurrencyStyle::Usd), "$1,000,000.00");
    }

    #[test]
    fn test_price_aud_prefix() {
        assert_eq!(price(5.1, CurrencyStyle::Aud), "A$5.10");
    }

    #[test]
    fn test_market_cap() {
        assert_eq!(
            format_value(12_500_000_000.0, FieldKind::MarketCap, CurrencyStyle::Usd),
            "$12.50B"
        );
    }

    #[test]
    fn test_revenue_zero_is_bare() {
        assert_eq!(format_value(0.0, FieldKind::Revenue, CurrencyStyle::Usd), "$0");
        assert_eq!(
            format_value(232_700_000.0, FieldKind::Revenue, CurrencyStyle::Usd),
            "$232.7M"
        );
    }

    #[test]
    fn test_net_income_sign_leads_prefix() {
        assert_eq!(
            format_value(-3_200_000.0, FieldKind::NetIncome, CurrencyStyle::Usd),
            "-$3.2M"
        );
        assert_eq!(
            format_value(3_200_000.0, FieldKind::NetIncome, CurrencyStyle::Usd),
            "$3.2M"
        );
        assert_eq!(
            format_value(-1_500_000_000.0, FieldKind::NetIncome, CurrencyStyle::Aud),
            "-A$1.50B"
        );
    }

    #[test]
    fn test_forward_pe_ratio() {
        assert_eq!(format_value(12.5, FieldKind::ForwardPe, CurrencyStyle::Usd), "12.5x");
        assert_eq!(format_value(0.2853, FieldKind::ForwardPe, CurrencyStyle::Usd), "0.3x");
    }

    #[test]
    fn test_target_price() {
        assert_eq!(
            format_value(75.0, FieldKind::TargetPrice, CurrencyStyle::Usd),
            "$75.00"
        );
    }
}
