//! Display projection tests: tier labels, color tokens, bar clamping, and
//! banner gating by open positions.

use risk_core::classify::{AccountSnapshot, assess};
use risk_infra::present::project_display;

fn snapshot(total_assets: f64, unrealized_pnl: f64, initial_margin_total: f64) -> AccountSnapshot {
    AccountSnapshot {
        total_assets,
        unrealized_pnl,
        initial_margin_total,
        has_positions: true,
    }
}

#[test]
fn test_safe_display_has_no_banner() {
    let assessment = assess(&snapshot(100.0, 0.0, 50.0));
    let display = project_display(&assessment, true);
    assert_eq!(display.level, "SAFE");
    assert_eq!(display.color, "green");
    assert_eq!(display.banner, None);
    assert_eq!(display.ratio_pct, 50.0);
    assert_eq!(display.bar_pct, 50.0);
}

#[test]
fn test_tier_colors_and_banners() {
    let warning = project_display(&assess(&snapshot(100.0, -40.0, 50.0)), true);
    assert_eq!(warning.level, "WARNING");
    assert_eq!(warning.color, "amber");
    assert_eq!(warning.banner, Some("Margin usage elevated"));

    let restriction = project_display(&assess(&snapshot(100.0, -48.0, 50.0)), true);
    assert_eq!(restriction.level, "RESTRICTION");
    assert_eq!(restriction.color, "orange");
    assert_eq!(
        restriction.banner,
        Some("Close-only mode: position opening disabled")
    );

    let liquidation = project_display(&assess(&snapshot(100.0, -52.0, 50.0)), true);
    assert_eq!(liquidation.level, "LIQUIDATION");
    assert_eq!(liquidation.color, "red");
    assert_eq!(liquidation.banner, Some("Liquidation in progress"));
}

#[test]
fn test_banner_suppressed_without_positions() {
    // Tier copy is gated on open positions; the figures are not.
    let assessment = assess(&snapshot(100.0, -48.0, 50.0));
    let display = project_display(&assessment, false);
    assert_eq!(display.level, "RESTRICTION");
    assert_eq!(display.banner, None);
    assert!(display.ratio_pct > 96.0);
}

#[test]
fn test_bar_width_caps_at_100_while_label_caps_at_150() {
    // Raw ratio 400%: label shows the 150 ceiling, bar fills to 100.
    let assessment = assess(&snapshot(100.0, 0.0, 400.0));
    let display = project_display(&assessment, true);
    assert_eq!(display.ratio_pct, 150.0);
    assert_eq!(display.bar_pct, 100.0);

    // 104.17% raw: label keeps the raw value, bar still caps.
    let assessment = assess(&snapshot(100.0, -52.0, 50.0));
    let display = project_display(&assessment, true);
    assert!((display.ratio_pct - 104.166666).abs() < 1e-4);
    assert_eq!(display.bar_pct, 100.0);
}

#[test]
fn test_display_serializes_for_the_front_end() {
    let assessment = assess(&snapshot(100.0, -40.0, 50.0));
    let display = project_display(&assessment, true);
    let json = serde_json::to_value(&display).unwrap();

    assert_eq!(json["level"], "WARNING");
    assert_eq!(json["color"], "amber");
    assert_eq!(json["banner"], "Margin usage elevated");
    assert!((json["equity"].as_f64().unwrap() - 60.0).abs() < 1e-9);
    assert!((json["available_margin"].as_f64().unwrap() - 10.0).abs() < 1e-9);
    assert!((json["maintenance_margin_total"].as_f64().unwrap() - 25.0).abs() < 1e-9);
}
