//! Market data providers.

mod traits;
pub mod yahoo;

pub use traits::SnapshotProvider;
pub use yahoo::YahooProvider;
