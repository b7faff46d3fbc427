use serde::Serialize;

use crate::fundamentals::ResolvedFundamentals;

/// Per-share metrics derived from aggregate fundamentals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerShareMetrics {
    /// Book value per share (equity over shares outstanding).
    pub book_value: f64,
    /// Earnings per share (net income over shares outstanding).
    pub earnings: f64,
    /// Sales per share (revenue over shares outstanding).
    pub sales: f64,
}

impl PerShareMetrics {
    /// Derives per-share metrics from aggregate fundamentals.
    ///
    /// The share count is converted from millions to absolute units first.
    /// A zero share count yields all-zero metrics rather than dividing by
    /// zero.
    #[must_use]
    pub fn from_fundamentals(fundamentals: &ResolvedFundamentals) -> Self {
        let shares = fundamentals.shares_millions * 1_000_000.0;
        if shares > 0.0 {
            Self {
                book_value: fundamentals.equity / shares,
                earnings: fundamentals.net_income / shares,
                sales: fundamentals.revenue / shares,
            }
        } else {
            Self {
                book_value: 0.0,
                earnings: 0.0,
                sales: 0.0,
            }
        }
    }
}

/// One forecast year of the projection.
///
/// Immutable once computed; a row is fully determined by the fundamentals
/// it was projected from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionRow {
    /// The calendar year this row forecasts.
    pub year: i32,
    /// Projected book value per share.
    pub book_value: f64,
    /// Future price implied by the book value and the price-to-book multiple.
    pub price_by_book: f64,
    /// Projected earnings per share.
    pub earnings: f64,
    /// Future price implied by the EPS and the price-to-earnings multiple.
    pub price_by_earnings: f64,
    /// Projected sales per share.
    pub sales: f64,
    /// Future price implied by the SPS and the price-to-sales multiple.
    pub price_by_sales: f64,
}
