#![allow(dead_code)]

use fairvalue_rs::LabeledStatementTable;
use serde_json::{Value, json};

/// A profile record resembling what a quote/profile provider returns.
pub fn sample_profile() -> Value {
    json!({
        "sharesOutstanding": 10_000_000.0,
        "currentPrice": 100.0,
        "earningsGrowth": 0.10,
        "revenueGrowth": 0.08,
        "payoutRatio": 0.35,
        "dividendYield": 0.03,
        "trailingEps": 5.0,
        "priceToBook": 1.5,
        "trailingPE": 10.0,
        "priceToSalesTrailing12Months": 2.0,
    })
}

pub fn sample_income_statement() -> LabeledStatementTable {
    LabeledStatementTable::from_rows([
        ("Total Revenue", vec![5_000_000_000.0, 4_600_000_000.0]),
        ("Net Income", vec![1_000_000_000.0, 900_000_000.0]),
    ])
}

pub fn sample_balance_sheet() -> LabeledStatementTable {
    LabeledStatementTable::from_rows([(
        "Stockholders Equity",
        vec![8_000_000_000.0, 7_500_000_000.0],
    )])
}

/// Asserts two floats agree within an absolute tolerance.
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tolerance {tol})"
    );
}
