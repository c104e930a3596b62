//! Account risk classification.
//!
//! **Rule (Non-Negotiable):**
//! `risk_ratio = initial_margin_total / equity * 100` when equity > 0, else `0`.
//! Tier thresholds, evaluated highest first with inclusive boundaries:
//! `>= 100` → Liquidation, `>= 95` → Restriction, `>= 80` → Warning, else Safe.
//!
//! Classification reads the unclamped ratio; the 150% cap is a display
//! ceiling only. Maintenance margin is modeled as a fixed 50% of initial
//! margin — there is no independent MM data source.
//!
//! This module is the single source of truth for the threshold table. Gating
//! and display code consume the resulting `RiskLevel`; nothing re-derives
//! ratios elsewhere.

/// Ratio at or above which the account enters Warning (percent).
pub const WARNING_RATIO_PCT: f64 = 80.0;
/// Ratio at or above which opening new positions is restricted (percent).
pub const RESTRICTION_RATIO_PCT: f64 = 95.0;
/// Ratio at or above which the account is liquidation-eligible (percent).
pub const LIQUIDATION_RATIO_PCT: f64 = 100.0;
/// Display ceiling for the risk ratio (percent). Never feeds classification.
pub const DISPLAY_RATIO_CAP_PCT: f64 = 150.0;
/// Maintenance margin as a fraction of initial margin.
pub const MAINTENANCE_MARGIN_FACTOR: f64 = 0.5;

/// One consistent read of account state, assembled upstream.
///
/// No field is validated here: sign and finiteness are the snapshot
/// assembler's concern. `has_positions` gates status messaging only and
/// never enters the ratio math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccountSnapshot {
    /// Cash-like balance excluding open-position effects.
    pub total_assets: f64,
    /// Signed sum of unrealized P&L across open positions.
    pub unrealized_pnl: f64,
    /// Sum of initial margin reserved across open positions.
    pub initial_margin_total: f64,
    /// Whether any position is open (`open_position_count > 0`).
    pub has_positions: bool,
}

/// Risk tier, ordered by increasing severity.
///
/// The four tier names are contract-stable; presentation maps them to
/// colors and copy but must not rename them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    Safe,
    Warning,
    Restriction,
    Liquidation,
}

impl RiskLevel {
    /// Contract-stable tier name.
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Safe => "SAFE",
            RiskLevel::Warning => "WARNING",
            RiskLevel::Restriction => "RESTRICTION",
            RiskLevel::Liquidation => "LIQUIDATION",
        }
    }
}

/// Derived risk figures for one snapshot. Recomputed fresh on every
/// evaluation; no identity, no persistence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskAssessment {
    /// `total_assets + unrealized_pnl`. May be negative.
    pub equity: f64,
    /// Exactly `initial_margin_total * 0.5`.
    pub maintenance_margin_total: f64,
    /// Unclamped ratio in percent; `0` when equity is zero or negative.
    pub risk_ratio: f64,
    /// `min(risk_ratio, 150)` — presentation only.
    pub display_ratio: f64,
    /// Tier classified from the unclamped ratio.
    pub risk_level: RiskLevel,
    /// `max(equity - initial_margin_total, 0)`. Never negative.
    pub available_margin: f64,
}

/// Per-tier evaluation counters.
#[derive(Debug, Default)]
pub struct ClassifierMetrics {
    safe_total: u64,
    warning_total: u64,
    restriction_total: u64,
    liquidation_total: u64,
}

impl ClassifierMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn safe_total(&self) -> u64 {
        self.safe_total
    }

    pub fn warning_total(&self) -> u64 {
        self.warning_total
    }

    pub fn restriction_total(&self) -> u64 {
        self.restriction_total
    }

    pub fn liquidation_total(&self) -> u64 {
        self.liquidation_total
    }

    fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Safe => self.safe_total += 1,
            RiskLevel::Warning => self.warning_total += 1,
            RiskLevel::Restriction => self.restriction_total += 1,
            RiskLevel::Liquidation => self.liquidation_total += 1,
        }
    }
}

/// Compute a `RiskAssessment` from one snapshot.
///
/// Total over f64: never panics, never validates. NaN input falls through
/// every threshold comparison and classifies as `Safe`. Zero or negative
/// equity yields ratio `0` — also `Safe`, even with margin in use. Both
/// behaviors are kept deliberately for compatibility with the rest of the
/// system; callers that need an insolvency signal should read
/// `assessment.equity < 0` directly.
pub fn assess(snapshot: &AccountSnapshot) -> RiskAssessment {
    let equity = snapshot.total_assets + snapshot.unrealized_pnl;
    let maintenance_margin_total = snapshot.initial_margin_total * MAINTENANCE_MARGIN_FACTOR;

    let risk_ratio = if equity > 0.0 {
        snapshot.initial_margin_total / equity * 100.0
    } else {
        0.0
    };

    let risk_level = classify_ratio(risk_ratio);
    let display_ratio = risk_ratio.min(DISPLAY_RATIO_CAP_PCT);
    let available_margin = (equity - snapshot.initial_margin_total).max(0.0);

    RiskAssessment {
        equity,
        maintenance_margin_total,
        risk_ratio,
        display_ratio,
        risk_level,
        available_margin,
    }
}

/// `assess` plus per-tier counters and a debug line on elevated tiers.
pub fn assess_with_metrics(
    snapshot: &AccountSnapshot,
    metrics: &mut ClassifierMetrics,
) -> RiskAssessment {
    let assessment = assess(snapshot);
    metrics.record(assessment.risk_level);
    if assessment.risk_level > RiskLevel::Safe {
        tracing::debug!(
            "RiskElevated level={} risk_ratio={:.2} equity={:.2} im_total={:.2}",
            assessment.risk_level.as_str(),
            assessment.risk_ratio,
            assessment.equity,
            snapshot.initial_margin_total,
        );
    }
    assessment
}

fn classify_ratio(ratio: f64) -> RiskLevel {
    if ratio >= LIQUIDATION_RATIO_PCT {
        RiskLevel::Liquidation
    } else if ratio >= RESTRICTION_RATIO_PCT {
        RiskLevel::Restriction
    } else if ratio >= WARNING_RATIO_PCT {
        RiskLevel::Warning
    } else {
        RiskLevel::Safe
    }
}
