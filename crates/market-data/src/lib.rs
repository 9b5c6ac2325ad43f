//! Tickerboard Market Data Crate
//!
//! Fetches the per-ticker snapshot of quotes and fundamentals that the
//! dashboard refresher rewrites into the HTML document.
//!
//! # Overview
//!
//! The crate exposes:
//! - [`TickerSnapshot`]: the raw values fetched for one ticker (spot price,
//!   market cap, revenue, net income, 52-week high/low, target price,
//!   forward P/E). Every field is optional; absent values are simply
//!   skipped downstream.
//! - [`SnapshotProvider`]: the provider seam. One implementation ships,
//!   [`YahooProvider`], which reads the Yahoo Finance quoteSummary API.
//! - [`fetch_all`]: sequential retrieval over a ticker table with
//!   per-symbol failure isolation.
//!
//! # Core Types
//!
//! - [`TickerConfig`] - display id plus the provider symbol it maps to
//! - [`FieldKind`] - the displayed quantity kinds and their marker names
//! - [`SnapshotSet`] - everything one refresh run has to work with

pub mod errors;
pub mod models;
pub mod provider;
pub mod service;

pub use errors::MarketDataError;
pub use models::{FieldKind, SnapshotSet, TickerConfig, TickerId, TickerSnapshot};
pub use provider::{SnapshotProvider, YahooProvider};
pub use service::fetch_all;
