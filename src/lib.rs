//! fairvalue-rs: deterministic multi-year share-price projection from
//! reported company fundamentals.
//!
//! The crate does no I/O. A data-retrieval collaborator supplies a flat
//! profile record, an income-statement and a balance-sheet table, and a
//! price-history series; the core resolves them into canonical
//! [`ResolvedFundamentals`] (ordered-alias label matching, safe numeric
//! coercion, zero defaults), compounds the per-share metrics over a
//! forecast horizon, and reduces the horizon to a [`SummaryMetrics`]
//! (blended future price, gain/loss, margin of safety, CAGR).
//!
//! Every stage is a pure function of its inputs: the same data always
//! produces the same rows, and nothing here carries shared mutable state.
//!
//! # Example
//!
//! ```
//! use fairvalue_rs::{LabeledStatementTable, Valuation};
//! use serde_json::json;
//!
//! let profile = json!({
//!     "sharesOutstanding": 10_000_000.0,
//!     "currentPrice": 100.0,
//!     "priceToBook": 1.5,
//!     "trailingPE": 10.0,
//! });
//! let income = LabeledStatementTable::from_rows([
//!     ("Total Revenue", vec![5_000_000_000.0]),
//!     ("Net Income", vec![1_000_000_000.0]),
//! ]);
//! let balance = LabeledStatementTable::from_rows([
//!     ("Stockholders Equity", vec![8_000_000_000.0]),
//! ]);
//!
//! let valuation = Valuation::new().base_year(2025);
//! let fundamentals = valuation.resolve(&profile, &income, &balance, &[])?;
//! let rows = valuation.project(&fundamentals);
//! let summary = valuation.summarize(&rows, fundamentals.last_price);
//! println!("implied future price: {:.2}", summary.future_price);
//! # Ok::<(), fairvalue_rs::FvError>(())
//! ```

pub mod core;
pub mod fundamentals;
pub mod projection;
pub mod statements;
pub mod summary;
mod valuation;

pub use crate::core::{ClosePrice, FvError};
pub use fundamentals::{ResolvedFundamentals, resolve};
pub use projection::{DEFAULT_HORIZON, PerShareMetrics, ProjectionRow, project};
pub use statements::{ConceptAliasSet, LabeledStatementTable, resolve_concept};
pub use summary::{SummaryMetrics, summarize};
pub use valuation::Valuation;
