//! Assembly of [`ResolvedFundamentals`] from raw provider data.

mod assemble;
mod model;

pub use model::ResolvedFundamentals;

use serde_json::Value;

use crate::core::{ClosePrice, FvError};
use crate::statements::LabeledStatementTable;

/// Resolves one company's fundamentals from its profile record, statement
/// tables, and price history.
///
/// This is a pure transform of already-fetched data: the profile record is
/// a flat key-to-scalar JSON object (keys may be absent), the statement tables
/// order periods most-recent-first, and the price history is consulted only
/// when the profile lacks a usable `currentPrice`.
///
/// Missing concepts resolve to `0.0`, never to an error. Two resolved
/// fields deliberately conflate "absent" with "exactly zero" and trigger a
/// secondary lookup in that case: the five-year EPS growth (falls back to
/// the quarterly growth figure) and the payout ratio (derived from dividend
/// yield and trailing EPS when both are strictly positive).
///
/// # Errors
///
/// Returns [`FvError::UnavailableFundamentals`] when both statement tables
/// are empty. Callers are expected to fall back to operator-supplied
/// values in that case, built from [`ResolvedFundamentals::default`] and
/// the `with_*` overrides.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
pub fn resolve(
    profile: &Value,
    income_stmt: &LabeledStatementTable,
    balance_sheet: &LabeledStatementTable,
    history: &[ClosePrice],
) -> Result<ResolvedFundamentals, FvError> {
    assemble::resolve(profile, income_stmt, balance_sheet, history)
}
