use fairvalue_rs::{ClosePrice, FvError, LabeledStatementTable, resolve};
use serde_json::json;

use crate::common::{assert_close, sample_balance_sheet, sample_income_statement, sample_profile};

#[test]
fn resolves_a_complete_company() {
    let f = resolve(
        &sample_profile(),
        &sample_income_statement(),
        &sample_balance_sheet(),
        &[],
    )
    .unwrap();

    assert_close(f.shares_millions, 10.0, 1e-9);
    assert_close(f.last_price, 100.0, 1e-9);
    assert_close(f.revenue, 5_000_000_000.0, 1e-3);
    assert_close(f.net_income, 1_000_000_000.0, 1e-3);
    assert_close(f.equity, 8_000_000_000.0, 1e-3);
    assert_close(f.roe_annual, 12.5, 1e-9);
    assert_close(f.eps_growth_5y, 10.0, 1e-9);
    assert_close(f.sps_growth_annual, 8.0, 1e-9);
    assert_close(f.sps_growth_5y, 8.0, 1e-9);
    assert_close(f.payout_ratio, 35.0, 1e-9);
    assert_close(f.avg_pbv, 1.5, 1e-9);
    assert_close(f.avg_per, 10.0, 1e-9);
    assert_close(f.avg_psr, 2.0, 1e-9);
}

#[test]
fn unavailable_when_both_tables_are_empty() {
    let err = resolve(
        &sample_profile(),
        &LabeledStatementTable::default(),
        &LabeledStatementTable::default(),
        &[],
    )
    .unwrap_err();
    assert!(matches!(err, FvError::UnavailableFundamentals));
}

#[test]
fn a_single_present_table_still_resolves() {
    let f = resolve(
        &sample_profile(),
        &sample_income_statement(),
        &LabeledStatementTable::default(),
        &[],
    )
    .unwrap();

    // Missing balance-sheet concepts come back as zero, never as an error.
    assert_eq!(f.equity, 0.0);
    assert_eq!(f.roe_annual, 0.0);
    assert_close(f.revenue, 5_000_000_000.0, 1e-3);
}

#[test]
fn zero_equity_never_divides() {
    let balance = LabeledStatementTable::from_rows([("Total Equity", vec![0.0])]);
    let f = resolve(&sample_profile(), &sample_income_statement(), &balance, &[]).unwrap();

    assert_eq!(f.roe_annual, 0.0);
    assert!(f.roe_avg_5y.is_finite());
}

#[test]
fn shares_conversion_guards_non_positive_counts() {
    let mut profile = sample_profile();
    profile["sharesOutstanding"] = json!(0.0);
    let f = resolve(
        &profile,
        &sample_income_statement(),
        &sample_balance_sheet(),
        &[],
    )
    .unwrap();
    assert_eq!(f.shares_millions, 0.0);

    profile["sharesOutstanding"] = json!(null);
    let f = resolve(
        &profile,
        &sample_income_statement(),
        &sample_balance_sheet(),
        &[],
    )
    .unwrap();
    assert_eq!(f.shares_millions, 0.0);
}

#[test]
fn profile_price_wins_over_history() {
    let history = [ClosePrice {
        ts: 1_700_000_000,
        close: 90.0,
    }];
    let f = resolve(
        &sample_profile(),
        &sample_income_statement(),
        &sample_balance_sheet(),
        &history,
    )
    .unwrap();
    assert_close(f.last_price, 100.0, 1e-9);
}

#[test]
fn history_close_is_the_last_resort_price() {
    let mut profile = sample_profile();
    profile.as_object_mut().unwrap().remove("currentPrice");

    let history = [
        ClosePrice {
            ts: 1_699_913_600,
            close: 88.0,
        },
        ClosePrice {
            ts: 1_700_000_000,
            close: 90.0,
        },
    ];
    let f = resolve(
        &profile,
        &sample_income_statement(),
        &sample_balance_sheet(),
        &history,
    )
    .unwrap();
    assert_close(f.last_price, 90.0, 1e-9);

    // A null price behaves like an absent one.
    profile["currentPrice"] = json!(null);
    let f = resolve(
        &profile,
        &sample_income_statement(),
        &sample_balance_sheet(),
        &history,
    )
    .unwrap();
    assert_close(f.last_price, 90.0, 1e-9);

    // No history either: the price defaults to zero.
    let f = resolve(
        &profile,
        &sample_income_statement(),
        &sample_balance_sheet(),
        &[],
    )
    .unwrap();
    assert_eq!(f.last_price, 0.0);
}

#[test]
fn trailing_roe_skips_zero_equity_periods() {
    let income = LabeledStatementTable::from_rows([("Net Income", vec![10.0, 5.0, 5.0])]);
    let balance = LabeledStatementTable::from_rows([("Total Equity", vec![100.0, 0.0, 50.0])]);

    let f = resolve(&sample_profile(), &income, &balance, &[]).unwrap();

    // ROEs are [10%, skipped, 10%]: the mean is 10%, not 6.67%.
    assert_close(f.roe_avg_5y, 10.0, 1e-9);
}

#[test]
fn trailing_roe_is_bounded_by_income_statement_width() {
    let income = LabeledStatementTable::from_rows([("Net Income", vec![10.0, 20.0])]);
    let balance = LabeledStatementTable::from_rows([(
        "Total Equity",
        vec![100.0, 100.0, 100.0, 100.0, 100.0, 100.0],
    )]);

    let f = resolve(&sample_profile(), &income, &balance, &[]).unwrap();

    // Only two income periods exist, so only two ROEs are averaged.
    assert_close(f.roe_avg_5y, 15.0, 1e-9);
}

#[test]
fn trailing_roe_with_no_qualifying_period_is_zero() {
    let income = LabeledStatementTable::from_rows([("Net Income", vec![10.0, 5.0])]);
    let balance = LabeledStatementTable::from_rows([("Total Equity", vec![0.0, 0.0])]);

    let f = resolve(&sample_profile(), &income, &balance, &[]).unwrap();
    assert_eq!(f.roe_avg_5y, 0.0);
}
