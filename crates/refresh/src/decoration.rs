//! Hand-authored decorations around the 52-week range field.
//!
//! Operators annotate the range text by hand, e.g.
//! `US OTC: ~$4.10 · 52wk: $3.00 – $9.00 · ATH $10.25`. Those annotations
//! are not modeled as data fields, so a refresh has to carry them across:
//! the leading OTC quote is regenerated from live data when possible, the
//! trailing note is preserved verbatim. Decode and encode are explicit
//! steps so the splicing is testable away from the engine.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading alternate-market quote, e.g. `US OTC: ~$4.10 · `
    static ref OTC_PREFIX: Regex = Regex::new(r"^US OTC: ~\$[\d.]+ · ").unwrap();

    /// Trailing free-text note after the numeric range, e.g. `· ATH $10.25`
    static ref TRAILING_NOTE: Regex = Regex::new(r"52wk: [^·<]+(· .+)$").unwrap();
}

/// The decorations decoded from an existing range text run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RangeDecoration {
    /// The old OTC prefix, including its trailing ` · ` separator.
    pub otc_prefix: Option<String>,

    /// The trailing note, starting at its `· `.
    pub suffix: Option<String>,
}

impl RangeDecoration {
    /// Decode the decorations from the text currently in the document.
    /// Text that matches neither shape simply yields no decorations.
    pub fn parse(text: &str) -> Self {
        let otc_prefix = OTC_PREFIX.find(text).map(|m| m.as_str().to_string());
        let suffix = TRAILING_NOTE.captures(text).map(|caps| caps[1].to_string());
        Self { otc_prefix, suffix }
    }

    /// Encode the refreshed text run: regenerated-or-preserved prefix, the
    /// new range body, then the preserved note.
    ///
    /// `otc_quote` is the current spot price of the linked alternate-market
    /// ticker; when it is unavailable the old prefix is kept byte-for-byte.
    pub fn render(&self, body: &str, otc_quote: Option<f64>) -> String {
        let mut out = String::new();
        if let Some(old_prefix) = &self.otc_prefix {
            match otc_quote {
                Some(quote) => out.push_str(&format!("US OTC: ~${:.2} · ", quote)),
                None => out.push_str(old_prefix),
            }
        }
        out.push_str(body);
        if let Some(suffix) = &self.suffix {
            out.push(' ');
            out.push_str(suffix);
        }
        out
    }
}
