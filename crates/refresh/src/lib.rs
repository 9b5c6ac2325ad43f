//! Tickerboard Refresh Crate
//!
//! Rewrites the figures of a hand-authored HTML dashboard in place. The
//! document is never parsed as a DOM: elements carrying a
//! `data-ticker`/`data-field` marker pair are located lexically, and only
//! the text run between the marked tag's `>` and the next `<` is ever
//! replaced (plus one single-letter class token for the net-income sign).
//! Every other byte of the document survives untouched, which is the whole
//! point: the page is hand-written HTML, not a template.
//!
//! The crate does no I/O. [`Engine::apply`] takes the document text, the
//! fetched [`SnapshotSet`](tickerboard_market_data::SnapshotSet), and the
//! wall-clock instant to stamp, and returns the new text plus a
//! [`ChangeReport`]. Applying the same inputs twice is a byte-level no-op.

pub mod config;
pub mod decoration;
pub mod engine;
pub mod format;
pub mod locator;

pub use config::RefreshConfig;
pub use engine::{ChangeReport, Engine};
pub use format::CurrencyStyle;
