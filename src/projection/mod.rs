//! Per-share metrics and the multi-year compounding projection.

mod engine;
mod model;

pub use model::{PerShareMetrics, ProjectionRow};

use crate::fundamentals::ResolvedFundamentals;

/// Default number of forecast years.
pub const DEFAULT_HORIZON: usize = 5;

/// Projects per-share metrics and implied prices over the forecast horizon.
///
/// For forecast year `i` (1-based), each per-share metric compounds as
/// `metric * (1 + rate)^i`: book value with the trailing-average ROE,
/// earnings with the five-year EPS growth, sales with the five-year SPS
/// growth. The implied price per valuation approach is the projected
/// metric times the corresponding average multiple.
///
/// The returned rows are in year order, one per calendar year starting at
/// `base_year`. The projection is a pure function of its inputs: calling
/// it twice with the same fundamentals produces identical rows.
#[must_use]
#[cfg_attr(feature = "tracing", tracing::instrument(skip(fundamentals)))]
pub fn project(
    fundamentals: &ResolvedFundamentals,
    base_year: i32,
    horizon: usize,
) -> Vec<ProjectionRow> {
    engine::project(fundamentals, base_year, horizon)
}
