use fairvalue_rs::{FvError, LabeledStatementTable};
use serde_json::json;

#[test]
fn from_json_accepts_a_provider_object() {
    let table = LabeledStatementTable::from_json(&json!({
        "Total Revenue": [5_000_000_000.0, 4_600_000_000.0],
        "Net Income": [1_000_000_000.0],
    }))
    .unwrap();

    assert!(!table.is_empty());
    assert_eq!(table.period_count(), 2);
}

#[test]
fn from_json_rejects_non_object_payloads() {
    let err = LabeledStatementTable::from_json(&json!([1, 2, 3])).unwrap_err();
    assert!(matches!(err, FvError::Data(_)));
}

#[test]
fn rows_with_no_periods_are_dropped() {
    let table = LabeledStatementTable::from_json(&json!({
        "Total Revenue": [],
        "Net Income": 12.0,
    }))
    .unwrap();

    // A label either is absent or maps to a non-empty period sequence.
    assert!(table.is_empty());
    assert_eq!(table.period_count(), 0);
}

#[test]
fn from_rows_drops_empty_rows_too() {
    let table =
        LabeledStatementTable::from_rows([("Total Revenue", vec![]), ("Net Income", vec![1.0])]);
    assert_eq!(table.period_count(), 1);
}

#[test]
fn period_count_uses_the_widest_row() {
    let table = LabeledStatementTable::from_rows([
        ("Total Revenue", vec![1.0, 2.0, 3.0]),
        ("Net Income", vec![1.0]),
    ]);
    assert_eq!(table.period_count(), 3);
}
