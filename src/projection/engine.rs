use crate::fundamentals::ResolvedFundamentals;

use super::model::{PerShareMetrics, ProjectionRow};

pub(super) fn project(
    fundamentals: &ResolvedFundamentals,
    base_year: i32,
    horizon: usize,
) -> Vec<ProjectionRow> {
    let per_share = PerShareMetrics::from_fundamentals(fundamentals);

    // Growth rates arrive as percentages; compounding wants decimals.
    let roe = fundamentals.roe_avg_5y / 100.0;
    let eps_growth = fundamentals.eps_growth_5y / 100.0;
    let sps_growth = fundamentals.sps_growth_5y / 100.0;

    (0..horizon)
        .map(|i| {
            let exp = i32::try_from(i + 1).unwrap_or(i32::MAX);

            let book_value = per_share.book_value * (1.0 + roe).powi(exp);
            let earnings = per_share.earnings * (1.0 + eps_growth).powi(exp);
            let sales = per_share.sales * (1.0 + sps_growth).powi(exp);

            ProjectionRow {
                year: base_year + (exp - 1),
                book_value,
                price_by_book: book_value * fundamentals.avg_pbv,
                earnings,
                price_by_earnings: earnings * fundamentals.avg_per,
                sales,
                price_by_sales: sales * fundamentals.avg_psr,
            }
        })
        .collect()
}
