//! Reduction of a projection horizon into a condensed investment summary.

mod calc;
mod model;

pub use model::SummaryMetrics;

use crate::projection::ProjectionRow;

/// Reduces a projection horizon to a single investment summary.
///
/// The blended future price is the mean of the terminal row's three price
/// estimates, ignoring NaN entries. Gain/loss and CAGR are measured from
/// `last_price` to the blend; the annual return spreads the gain/loss
/// evenly over the horizon; the margin of safety is the discount of the
/// current price below the blend, floored at zero.
///
/// Every degenerate input (empty rows, non-positive price, non-positive or
/// all-NaN blend) resolves the affected percentages to `0.0`. This
/// function never panics and never produces a NaN percentage.
#[must_use]
#[cfg_attr(feature = "tracing", tracing::instrument(skip(rows)))]
pub fn summarize(rows: &[ProjectionRow], last_price: f64) -> SummaryMetrics {
    calc::summarize(rows, last_price)
}
