use crate::core::coerce::coerce;

use super::model::{ConceptAliasSet, LabeledStatementTable};

/// Resolves one canonical concept from a statement table.
///
/// Candidate labels are tried in declared order; the first label present in
/// the table whose period sequence has an entry at `offset` wins (offset 0
/// is the most recent period). A label that is present but whose sequence
/// is shorter than the offset is skipped in favor of the next candidate.
/// The matched cell is coerced through the crate's numeric coercion, so a
/// null or garbage cell resolves to `0.0` rather than failing.
///
/// Resolution is total and deterministic: it always returns a value, and
/// the tie-break is declaration order, first match wins.
#[must_use]
pub fn resolve_concept(
    table: &LabeledStatementTable,
    concept: ConceptAliasSet,
    offset: usize,
) -> f64 {
    for label in concept.labels() {
        if let Some(periods) = table.periods(label)
            && let Some(cell) = periods.get(offset)
        {
            return coerce(cell).unwrap_or(0.0);
        }
    }
    0.0
}
