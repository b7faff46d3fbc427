use crate::projection::ProjectionRow;

use super::model::SummaryMetrics;

pub(super) fn summarize(rows: &[ProjectionRow], last_price: f64) -> SummaryMetrics {
    let Some(terminal) = rows.last() else {
        return SummaryMetrics {
            last_price,
            future_price: 0.0,
            gain_loss_pct: 0.0,
            annual_return_pct: 0.0,
            margin_of_safety_pct: 0.0,
            cagr_pct: 0.0,
        };
    };

    let horizon = rows.len() as f64;
    let future_price = nan_mean(&[
        terminal.price_by_book,
        terminal.price_by_earnings,
        terminal.price_by_sales,
    ]);

    let gain_loss_pct = if last_price > 0.0 && future_price.is_finite() {
        (future_price / last_price - 1.0) * 100.0
    } else {
        0.0
    };

    // NaN compares false against everything, so a NaN blend falls into the
    // zero branch of each guard below.
    let margin_of_safety_pct = if last_price > 0.0 && future_price > 0.0 {
        ((future_price - last_price) / future_price * 100.0).max(0.0)
    } else {
        0.0
    };

    let cagr_pct = if last_price > 0.0 && future_price > 0.0 {
        ((future_price / last_price).powf(1.0 / horizon) - 1.0) * 100.0
    } else {
        0.0
    };

    SummaryMetrics {
        last_price,
        future_price,
        gain_loss_pct,
        annual_return_pct: gain_loss_pct / horizon,
        margin_of_safety_pct,
        cagr_pct,
    }
}

/// Mean of the non-NaN entries; NaN when every entry is NaN.
fn nan_mean(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        if !v.is_nan() {
            sum += v;
            count += 1;
        }
    }
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}
