use chrono::{Datelike, Utc};
use serde_json::Value;

use crate::core::{ClosePrice, FvError};
use crate::fundamentals::{self, ResolvedFundamentals};
use crate::projection::{self, DEFAULT_HORIZON, ProjectionRow};
use crate::statements::LabeledStatementTable;
use crate::summary::{self, SummaryMetrics};

/// A high-level interface for one valuation run, binding resolution,
/// projection, and summary together.
///
/// A `Valuation` carries the two knobs shared across the pipeline: the
/// first forecast calendar year and the horizon length. The default base
/// year is the current UTC calendar year and the default horizon is
/// [`DEFAULT_HORIZON`] years.
///
/// # Example
///
/// ```
/// use fairvalue_rs::{ResolvedFundamentals, Valuation};
///
/// let fundamentals = ResolvedFundamentals::default()
///     .with_shares_millions(10.0)
///     .with_last_price(100.0)
///     .with_equity(8_000_000_000.0)
///     .with_roe_avg_5y(12.0)
///     .with_avg_pbv(1.5);
///
/// let valuation = Valuation::new().base_year(2025);
/// let (rows, summary) = valuation.run(&fundamentals);
/// assert_eq!(rows.len(), 5);
/// assert!(summary.future_price > 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Valuation {
    base_year: i32,
    horizon: usize,
}

impl Valuation {
    /// Creates a valuation with the default base year (the current UTC
    /// calendar year) and the default five-year horizon.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_year: Utc::now().year(),
            horizon: DEFAULT_HORIZON,
        }
    }

    /// Sets the first forecast calendar year.
    #[must_use]
    pub const fn base_year(mut self, year: i32) -> Self {
        self.base_year = year;
        self
    }

    /// Sets the number of forecast years.
    #[must_use]
    pub const fn horizon(mut self, years: usize) -> Self {
        self.horizon = years;
        self
    }

    /// Resolves fundamentals from raw provider data.
    ///
    /// See [`fundamentals::resolve`] for the resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`FvError::UnavailableFundamentals`] when both statement
    /// tables are empty.
    pub fn resolve(
        &self,
        profile: &Value,
        income_stmt: &LabeledStatementTable,
        balance_sheet: &LabeledStatementTable,
        history: &[ClosePrice],
    ) -> Result<ResolvedFundamentals, FvError> {
        fundamentals::resolve(profile, income_stmt, balance_sheet, history)
    }

    /// Projects per-share metrics and implied prices over the horizon.
    #[must_use]
    pub fn project(&self, fundamentals: &ResolvedFundamentals) -> Vec<ProjectionRow> {
        projection::project(fundamentals, self.base_year, self.horizon)
    }

    /// Summarizes a projection against a current price.
    #[must_use]
    pub fn summarize(&self, rows: &[ProjectionRow], last_price: f64) -> SummaryMetrics {
        summary::summarize(rows, last_price)
    }

    /// Projects and summarizes in one call, using the fundamentals' own
    /// last price for the comparison.
    #[must_use]
    pub fn run(&self, fundamentals: &ResolvedFundamentals) -> (Vec<ProjectionRow>, SummaryMetrics) {
        let rows = self.project(fundamentals);
        let summary = self.summarize(&rows, fundamentals.last_price);
        (rows, summary)
    }
}

impl Default for Valuation {
    fn default() -> Self {
        Self::new()
    }
}
