//! Upstream account/position payload structs.
//!
//! These model the account data source the risk engine consumes: a balance
//! summary plus the list of open positions, each carrying its reserved
//! initial margin and unrealized P&L. The engine never iterates positions in
//! the classifier itself; `snapshot::build_snapshot` does the summing.

use serde::Deserialize;

/// Account balance summary from the account endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccountSummary {
    /// Cash-like balance excluding open-position effects.
    pub total_assets: f64,
    /// Settlement currency (e.g., "USDC").
    pub currency: String,
}

/// Side of a binary-outcome market position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Yes,
    No,
}

/// One open position from the positions endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OpenPosition {
    /// Market identifier (e.g., "us-election-2028").
    pub market_id: String,
    /// Which outcome the position is long.
    pub outcome: Outcome,
    /// Position size in shares.
    pub size: f64,
    /// Average entry price per share.
    pub avg_price: f64,
    /// Initial margin reserved for this position.
    pub initial_margin: f64,
    /// Unrealized P&L at the latest mark price. Signed.
    pub unrealized_pnl: f64,
}
