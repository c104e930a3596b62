//! Snapshot fingerprinting.
//!
//! `fingerprint = xxhash64(total_assets + unrealized_pnl + initial_margin_total + has_positions)`
//!
//! Callers re-run classification only when the fingerprint changes, which is
//! how the surrounding app skips recomputing on render ticks that did not
//! move any input. Floats are hashed by bit pattern, so NaN payloads and
//! signed zeros are distinguished deterministically.

use xxhash_rust::xxh64::xxh64;

use crate::classify::AccountSnapshot;

/// Compute the fingerprint for one snapshot.
pub fn snapshot_fingerprint(snapshot: &AccountSnapshot) -> u64 {
    // Fixed-width fields need no separator for correctness; the 0xFF
    // delimiter keeps the layout explicit and stable if a variable-width
    // field is ever added.
    let mut buf = Vec::with_capacity(32);

    buf.extend_from_slice(&snapshot.total_assets.to_bits().to_le_bytes());
    buf.push(0xFF);
    buf.extend_from_slice(&snapshot.unrealized_pnl.to_bits().to_le_bytes());
    buf.push(0xFF);
    buf.extend_from_slice(&snapshot.initial_margin_total.to_bits().to_le_bytes());
    buf.push(0xFF);
    buf.push(snapshot.has_positions as u8);

    xxh64(&buf, 0)
}

/// Format a fingerprint as a 16-char lowercase hex string.
pub fn format_fingerprint(fingerprint: u64) -> String {
    format!("{fingerprint:016x}")
}
