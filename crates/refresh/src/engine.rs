//! The substitution engine.
//!
//! One document string is threaded through a fixed sequence of passes;
//! each pass is a pure text-to-text rewrite. The engine does no I/O and
//! never fails: absent values and absent elements are counted as skipped,
//! and unrecognized existing text is simply replaced (or, for range
//! decorations, carried over).

use chrono::{DateTime, Local};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::{debug, info};

use tickerboard_market_data::{FieldKind, SnapshotSet};

use crate::config::RefreshConfig;
use crate::decoration::RangeDecoration;
use crate::format::{format_value, price};
use crate::locator;

/// Marker names of the derived fields the engine owns.
const RANGE_FIELD: &str = "52wk_range";
const LAST_UPDATED_FIELD: &str = "last-updated";
const PRICE_DATE_FIELD: &str = "price_date";

lazy_static! {
    /// The single-letter sign token inside the two class presentations,
    /// `class="val r"` on the summary cards and `class="mono g"` in the
    /// overview table. `a` is the hand-authored "ambiguous" token.
    static ref SIGN_TOKEN: Regex = Regex::new(r#"(class="(?:val|mono) )[rga](")"#).unwrap();
}

/// Counts accumulated over one engine run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChangeReport {
    /// Elements whose bytes actually changed.
    pub updated: usize,

    /// Fields skipped: raw value absent, or no matching element in the
    /// document.
    pub skipped: usize,
}

/// The substitution engine. Holds only immutable configuration; every
/// run's state lives in the document string passed through.
pub struct Engine<'a> {
    config: &'a RefreshConfig,
}

impl<'a> Engine<'a> {
    pub fn new(config: &'a RefreshConfig) -> Self {
        Self { config }
    }

    /// Rewrite every marked figure in `document` from `snapshots`, stamping
    /// `now` into the timestamp fields. Returns the new document text and
    /// the change report; the input is never mutated.
    ///
    /// Applying the result again with the same snapshots and the same `now`
    /// reproduces it byte-for-byte.
    pub fn apply(
        &self,
        document: &str,
        snapshots: &SnapshotSet,
        now: DateTime<Local>,
    ) -> (String, ChangeReport) {
        let mut report = ChangeReport::default();
        let mut html = document.to_string();

        html = self.apply_primitive_fields(html, snapshots, &mut report);
        html = self.apply_ranges(html, snapshots, &mut report);
        html = self.apply_sign_classes(html, snapshots, &mut report);
        html = self.apply_stamp(html, LAST_UPDATED_FIELD, &timestamp_text(now), &mut report);
        html = self.apply_stamp(html, PRICE_DATE_FIELD, &date_label_text(now), &mut report);

        (html, report)
    }

    /// Pass 1: the six directly-sourced display fields.
    fn apply_primitive_fields(
        &self,
        mut html: String,
        snapshots: &SnapshotSet,
        report: &mut ChangeReport,
    ) -> String {
        for ticker in &self.config.tickers {
            let Some(snapshot) = snapshots.get(&ticker.id) else {
                continue;
            };
            let style = self.config.currency_style(&ticker.id);

            for field in FieldKind::PRIMITIVE_DISPLAY {
                let Some(value) = snapshot.get(field) else {
                    report.skipped += 1;
                    continue;
                };

                let formatted = format_value(value, field, style);
                let pattern = locator::marked_text_run(&ticker.id, field.as_str());
                let (next, matched, changed) = rewrite_text_runs(&html, &pattern, &formatted);

                if matched == 0 {
                    report.skipped += 1;
                    continue;
                }
                if changed > 0 {
                    info!(
                        "  {}.{} -> {} ({} element(s))",
                        ticker.id,
                        field.as_str(),
                        formatted,
                        changed
                    );
                }
                report.updated += changed;
                html = next;
            }
        }
        html
    }

    /// Pass 2: the composite 52-week range, preserving hand-authored
    /// decorations around the generated body.
    fn apply_ranges(
        &self,
        mut html: String,
        snapshots: &SnapshotSet,
        report: &mut ChangeReport,
    ) -> String {
        for ticker in &self.config.tickers {
            let Some(snapshot) = snapshots.get(&ticker.id) else {
                continue;
            };
            let (Some(high), Some(low)) = (snapshot.week52_high, snapshot.week52_low) else {
                report.skipped += 1;
                continue;
            };

            let style = self.config.currency_style(&ticker.id);
            let body = format!("52wk: {} – {}", price(low, style), price(high, style));

            // The OTC prefix shows another listing's quote; look it up in
            // this run's snapshots via the configured link.
            let otc_quote = self
                .config
                .otc_quote_links
                .get(&ticker.id)
                .and_then(|linked| snapshots.get(linked))
                .and_then(|snapshot| snapshot.price);

            let pattern = locator::marked_text_run(&ticker.id, RANGE_FIELD);
            let mut matched = 0;
            let mut changed = 0;
            let next = pattern
                .replace_all(&html, |caps: &Captures| {
                    matched += 1;
                    let old_text = &caps[2];
                    let new_text = RangeDecoration::parse(old_text).render(&body, otc_quote);
                    if new_text != old_text {
                        changed += 1;
                    }
                    format!("{}{}{}", &caps[1], new_text, &caps[3])
                })
                .into_owned();

            if matched == 0 {
                report.skipped += 1;
                continue;
            }
            if changed > 0 {
                info!("  {}.{} -> {}", ticker.id, RANGE_FIELD, body);
            }
            report.updated += changed;
            html = next;
        }
        html
    }

    /// Pass 3: retarget the net-income sign class on both surface
    /// presentations. Rewrites an attribute token, never text content.
    fn apply_sign_classes(
        &self,
        mut html: String,
        snapshots: &SnapshotSet,
        report: &mut ChangeReport,
    ) -> String {
        for ticker in &self.config.tickers {
            let Some(net_income) = snapshots
                .get(&ticker.id)
                .and_then(|snapshot| snapshot.net_income)
            else {
                continue;
            };
            let token = if net_income < 0.0 { "r" } else { "g" };

            let pattern = locator::marked_open_tag(&ticker.id, FieldKind::NetIncome.as_str());
            let mut changed = 0;
            let next = pattern
                .replace_all(&html, |caps: &Captures| {
                    let tag = &caps[0];
                    let rewritten = SIGN_TOKEN
                        .replace(tag, |token_caps: &Captures| {
                            format!("{}{}{}", &token_caps[1], token, &token_caps[2])
                        })
                        .into_owned();
                    if rewritten != *tag {
                        changed += 1;
                    }
                    rewritten
                })
                .into_owned();

            if changed > 0 {
                debug!("  {}.net_income class -> {}", ticker.id, token);
            }
            report.updated += changed;
            html = next;
        }
        html
    }

    /// Passes 4 and 5: the unconditional ticker-independent stamps.
    fn apply_stamp(
        &self,
        html: String,
        field: &str,
        text: &str,
        report: &mut ChangeReport,
    ) -> String {
        let pattern = locator::field_text_run(field);
        let (next, _, changed) = rewrite_text_runs(&html, &pattern, text);
        report.updated += changed;
        next
    }
}

/// Rewrite every captured text run to `replacement`. Returns the new
/// document plus how many runs matched and how many actually changed.
fn rewrite_text_runs(html: &str, pattern: &Regex, replacement: &str) -> (String, usize, usize) {
    let mut matched = 0;
    let mut changed = 0;
    let out = pattern
        .replace_all(html, |caps: &Captures| {
            matched += 1;
            if &caps[2] != replacement {
                changed += 1;
            }
            format!("{}{}{}", &caps[1], replacement, &caps[3])
        })
        .into_owned();
    (out, matched, changed)
}

fn timestamp_text(now: DateTime<Local>) -> String {
    format!(
        "Prices last updated: {}",
        now.format("%b %d, %Y %I:%M %p ET")
    )
}

fn date_label_text(now: DateTime<Local>) -> String {
    now.format("Price (%b %d)").to_string()
}
