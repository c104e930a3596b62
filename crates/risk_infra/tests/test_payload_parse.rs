//! Wire payload deserialization tests.

use risk_infra::feed::{AccountSummary, OpenPosition, Outcome};

#[test]
fn test_account_summary_parses() {
    let json = r#"{"total_assets": 1250.75, "currency": "USDC"}"#;
    let summary: AccountSummary = serde_json::from_str(json).unwrap();
    assert_eq!(summary.total_assets, 1250.75);
    assert_eq!(summary.currency, "USDC");
}

#[test]
fn test_open_position_parses() {
    let json = r#"{
        "market_id": "us-election-2028",
        "outcome": "yes",
        "size": 200.0,
        "avg_price": 0.55,
        "initial_margin": 44.0,
        "unrealized_pnl": -6.5
    }"#;
    let position: OpenPosition = serde_json::from_str(json).unwrap();
    assert_eq!(position.market_id, "us-election-2028");
    assert_eq!(position.outcome, Outcome::Yes);
    assert_eq!(position.size, 200.0);
    assert_eq!(position.initial_margin, 44.0);
    assert_eq!(position.unrealized_pnl, -6.5);
}

#[test]
fn test_outcome_labels_are_lowercase() {
    let yes: Outcome = serde_json::from_str(r#""yes""#).unwrap();
    let no: Outcome = serde_json::from_str(r#""no""#).unwrap();
    assert_eq!(yes, Outcome::Yes);
    assert_eq!(no, Outcome::No);

    // Uppercase labels are not part of the wire format.
    assert!(serde_json::from_str::<Outcome>(r#""YES""#).is_err());
}

#[test]
fn test_position_list_parses() {
    let json = r#"[
        {"market_id": "a", "outcome": "yes", "size": 10.0, "avg_price": 0.4,
         "initial_margin": 4.0, "unrealized_pnl": 0.2},
        {"market_id": "b", "outcome": "no", "size": 25.0, "avg_price": 0.6,
         "initial_margin": 15.0, "unrealized_pnl": -1.1}
    ]"#;
    let positions: Vec<OpenPosition> = serde_json::from_str(json).unwrap();
    assert_eq!(positions.len(), 2);
    assert_eq!(positions[1].outcome, Outcome::No);
}
