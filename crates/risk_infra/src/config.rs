//! Feed configuration defaults (fail-closed resolution).
//!
//! The classification thresholds are fixed constants in
//! `risk_core::classify` and are deliberately not configurable. What is
//! configurable is how the surrounding app polls and trusts upstream data:
//! snapshot max age and poll intervals. Explicit values win; a missing
//! value falls back to the default; a missing default fails closed.

use std::fmt;

/// Feed-side configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigParam {
    /// Max age of cached account data before evaluation must re-fetch.
    SnapshotMaxAgeMs,
    /// Poll interval for the account balance endpoint.
    AccountPollIntervalMs,
    /// Poll interval for the open-positions endpoint.
    PositionsPollIntervalMs,
    /// Max age of the mark price feeding unrealized P&L.
    MarkPriceMaxAgeMs,
}

/// Error when a required parameter is missing and has no default.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingConfigError {
    pub param_name: &'static str,
    pub reason: &'static str,
}

impl fmt::Display for MissingConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "config fail-closed: '{}' rejected ({})",
            self.param_name, self.reason
        )
    }
}

impl std::error::Error for MissingConfigError {}

/// Returns the default for a parameter, or `None` if no default exists.
pub fn default_value(param: ConfigParam) -> Option<f64> {
    match param {
        ConfigParam::SnapshotMaxAgeMs => Some(30_000.0),
        ConfigParam::AccountPollIntervalMs => Some(5_000.0),
        ConfigParam::PositionsPollIntervalMs => Some(5_000.0),
        ConfigParam::MarkPriceMaxAgeMs => Some(5_000.0),
    }
}

/// Returns the snake_case name for a parameter.
pub fn param_name(param: ConfigParam) -> &'static str {
    match param {
        ConfigParam::SnapshotMaxAgeMs => "snapshot_max_age_ms",
        ConfigParam::AccountPollIntervalMs => "account_poll_interval_ms",
        ConfigParam::PositionsPollIntervalMs => "positions_poll_interval_ms",
        ConfigParam::MarkPriceMaxAgeMs => "mark_price_max_age_ms",
    }
}

/// Expected number of ConfigParam variants. Update when adding new variants.
pub const EXPECTED_PARAM_COUNT: usize = 4;

/// All known `ConfigParam` variants (for exhaustive iteration in tests).
pub const ALL_PARAMS: &[ConfigParam] = &[
    ConfigParam::SnapshotMaxAgeMs,
    ConfigParam::AccountPollIntervalMs,
    ConfigParam::PositionsPollIntervalMs,
    ConfigParam::MarkPriceMaxAgeMs,
];

/// Resolve a configuration value with fail-safe semantics.
///
/// - If `value` is `Some`, returns that value (explicit config takes precedence).
/// - If `value` is `None` and the parameter has a default, returns the default.
/// - If `value` is `None` and no default exists, returns `Err` (fail-closed).
pub fn resolve_config_value(
    param: ConfigParam,
    value: Option<f64>,
) -> Result<f64, MissingConfigError> {
    if let Some(v) = value {
        if !v.is_finite() {
            return Err(MissingConfigError {
                param_name: param_name(param),
                reason: "value is non-finite (NaN or Infinity); fail-closed",
            });
        }
        if v < 0.0 {
            return Err(MissingConfigError {
                param_name: param_name(param),
                reason: "value is negative; all config params must be non-negative",
            });
        }
        return Ok(v);
    }
    default_value(param).ok_or_else(|| MissingConfigError {
        param_name: param_name(param),
        reason: "no default; caller must fail-closed",
    })
}
