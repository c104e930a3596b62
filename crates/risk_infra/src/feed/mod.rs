//! Account data feed adapter types.
//!
//! Re-exports from sub-modules for convenient access.

pub mod cache;
pub mod payload;

// Re-export key types for ergonomic imports.
pub use cache::{AccountCache, SnapshotAge, evaluate_snapshot_age};
pub use payload::{AccountSummary, OpenPosition, Outcome};
