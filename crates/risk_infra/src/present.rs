//! Display projection for the risk indicator.
//!
//! Pure mapping from a `RiskAssessment` to what the front end renders:
//! tier label, color token, progress-bar width, and per-tier status copy.
//! Tier-to-style dispatch is a plain `match` on the enum; the status banner
//! is shown only when the account has open positions.

use risk_core::classify::{RiskAssessment, RiskLevel};
use serde::Serialize;

/// Status copy per tier. `Safe` carries no banner.
const WARNING_BANNER: &str = "Margin usage elevated";
const RESTRICTION_BANNER: &str = "Close-only mode: position opening disabled";
const LIQUIDATION_BANNER: &str = "Liquidation in progress";

/// Render-ready view of one risk assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskDisplay {
    /// Contract-stable tier label ("SAFE" | "WARNING" | "RESTRICTION" | "LIQUIDATION").
    pub level: &'static str,
    /// Color token for badges and the progress bar.
    pub color: &'static str,
    /// Numeric ratio label in percent, capped at 150.
    pub ratio_pct: f64,
    /// Progress-bar width in percent, capped at 100.
    pub bar_pct: f64,
    /// Status banner; None when Safe or when no positions are open.
    pub banner: Option<&'static str>,
    /// Equity figure for the account header.
    pub equity: f64,
    /// Margin still available to open positions.
    pub available_margin: f64,
    /// Aggregate maintenance margin.
    pub maintenance_margin_total: f64,
}

/// Project an assessment into its display form.
///
/// `has_positions` comes from the snapshot the assessment was computed
/// from; it gates the banner only, never the figures.
pub fn project_display(assessment: &RiskAssessment, has_positions: bool) -> RiskDisplay {
    let banner = if has_positions {
        banner_for(assessment.risk_level)
    } else {
        None
    };

    RiskDisplay {
        level: assessment.risk_level.as_str(),
        color: color_for(assessment.risk_level),
        ratio_pct: assessment.display_ratio,
        bar_pct: assessment.display_ratio.min(100.0),
        banner,
        equity: assessment.equity,
        available_margin: assessment.available_margin,
        maintenance_margin_total: assessment.maintenance_margin_total,
    }
}

fn color_for(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Safe => "green",
        RiskLevel::Warning => "amber",
        RiskLevel::Restriction => "orange",
        RiskLevel::Liquidation => "red",
    }
}

fn banner_for(level: RiskLevel) -> Option<&'static str> {
    match level {
        RiskLevel::Safe => None,
        RiskLevel::Warning => Some(WARNING_BANNER),
        RiskLevel::Restriction => Some(RESTRICTION_BANNER),
        RiskLevel::Liquidation => Some(LIQUIDATION_BANNER),
    }
}
