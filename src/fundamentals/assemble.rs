use serde_json::Value;

use crate::core::{ClosePrice, FvError, coerce::coerce, num_or};
use crate::statements::{
    ConceptAliasSet, EQUITY, LabeledStatementTable, NET_INCOME, REVENUE, resolve_concept,
};

use super::model::ResolvedFundamentals;

/// Upper bound on the number of reporting periods the trailing ROE average
/// looks at; also bounded by however many columns the income statement has.
const TRAILING_ROE_PERIODS: usize = 5;

/// The trailing loop matches the single most common net-income label rather
/// than the full alias set used at offset 0.
const TRAILING_NET_INCOME: ConceptAliasSet =
    ConceptAliasSet::new("net income", &["Net Income"]);

pub(super) fn resolve(
    profile: &Value,
    income_stmt: &LabeledStatementTable,
    balance_sheet: &LabeledStatementTable,
    history: &[ClosePrice],
) -> Result<ResolvedFundamentals, FvError> {
    if income_stmt.is_empty() && balance_sheet.is_empty() {
        return Err(FvError::UnavailableFundamentals);
    }

    let shares_outstanding = num_or(profile, "sharesOutstanding", 0.0);
    let shares_millions = if shares_outstanding > 0.0 {
        shares_outstanding / 1_000_000.0
    } else {
        0.0
    };

    // A usable profile price wins, even a literal zero; the history close
    // only steps in when the profile value is absent or not a number.
    let last_price = profile
        .get("currentPrice")
        .and_then(coerce)
        .unwrap_or_else(|| history.last().map_or(0.0, |c| c.close));

    let revenue = resolve_concept(income_stmt, REVENUE, 0);
    let net_income = resolve_concept(income_stmt, NET_INCOME, 0);
    let equity = resolve_concept(balance_sheet, EQUITY, 0);

    let roe_annual = if equity == 0.0 {
        0.0
    } else {
        net_income / equity * 100.0
    };
    let roe_avg_5y = trailing_roe(income_stmt, balance_sheet);

    let mut eps_growth_5y = num_or(profile, "earningsGrowth", 0.0) * 100.0;
    if eps_growth_5y == 0.0 {
        // A value of exactly 0 is treated as "unavailable", not "zero
        // growth", and falls through to the quarterly figure.
        eps_growth_5y = num_or(profile, "earningsQuarterlyGrowth", 0.0) * 100.0;
    }

    // Profile data carries a single revenue-growth figure; it stands in for
    // both the annual and the five-year sales growth.
    let sps_growth = num_or(profile, "revenueGrowth", 0.0) * 100.0;

    let mut payout_ratio = num_or(profile, "payoutRatio", 0.0) * 100.0;
    if payout_ratio == 0.0 {
        let dividend_yield = num_or(profile, "dividendYield", 0.0);
        let eps = num_or(profile, "trailingEps", 0.0);
        if dividend_yield > 0.0 && eps > 0.0 {
            let dps = dividend_yield * last_price;
            payout_ratio = dps / eps * 100.0;
        }
    }

    Ok(ResolvedFundamentals {
        shares_millions,
        last_price,
        revenue,
        net_income,
        equity,
        roe_annual,
        roe_avg_5y,
        eps_growth_5y,
        sps_growth_annual: sps_growth,
        sps_growth_5y: sps_growth,
        payout_ratio,
        avg_pbv: num_or(profile, "priceToBook", 0.0),
        avg_per: num_or(profile, "trailingPE", 0.0),
        avg_psr: num_or(profile, "priceToSalesTrailing12Months", 0.0),
    })
}

/// Arithmetic mean of per-period ROE over the recent reporting periods.
///
/// Periods where the balance sheet resolves to zero equity are skipped, not
/// counted as zero, so companies with data gaps are not dragged toward zero.
fn trailing_roe(
    income_stmt: &LabeledStatementTable,
    balance_sheet: &LabeledStatementTable,
) -> f64 {
    let periods = income_stmt.period_count().min(TRAILING_ROE_PERIODS);

    let mut roes = Vec::with_capacity(periods);
    for offset in 0..periods {
        let net_income = resolve_concept(income_stmt, TRAILING_NET_INCOME, offset);
        let equity = resolve_concept(balance_sheet, EQUITY, offset);
        if equity != 0.0 {
            roes.push(net_income / equity * 100.0);
        }
    }

    if roes.is_empty() {
        0.0
    } else {
        roes.iter().sum::<f64>() / roes.len() as f64
    }
}
