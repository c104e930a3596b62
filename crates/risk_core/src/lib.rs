#![forbid(unsafe_code)]

pub mod classify;
pub mod fingerprint;
pub mod gating;

pub use classify::{
    AccountSnapshot, ClassifierMetrics, RiskAssessment, RiskLevel, assess, assess_with_metrics,
};
pub use fingerprint::{format_fingerprint, snapshot_fingerprint};
pub use gating::{
    OrderDirection, OrderGateMetrics, OrderGateRejectReason, OrderGateResult, evaluate_order_gate,
};
