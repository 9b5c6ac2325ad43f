//! Data models shared by the provider and the refresh engine.

mod snapshot;
mod types;

pub use snapshot::TickerSnapshot;
pub use types::{FieldKind, SnapshotSet, TickerConfig, TickerId};
