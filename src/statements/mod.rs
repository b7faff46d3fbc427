//! Labeled statement tables and ordered-alias concept resolution.
//!
//! Providers label the same financial concept inconsistently and may omit
//! older periods entirely. This module keeps the fallback policy as data
//! (an ordered [`ConceptAliasSet`] per concept) and makes resolution total:
//! every lookup returns a number, with `0.0` standing in for anything the
//! table cannot supply.

mod model;
mod resolve;

pub use model::{ConceptAliasSet, EQUITY, LabeledStatementTable, NET_INCOME, REVENUE};
pub use resolve::resolve_concept;
