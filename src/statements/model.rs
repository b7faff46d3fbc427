use serde::Serialize;
use serde_json::Value;

use crate::core::FvError;

/// A table of labeled financial line items, one row per reported concept.
///
/// Rows keep provider labels verbatim; every row maps a label to its
/// period values ordered most-recent-first. Labels are free text and vary
/// in casing and punctuation across providers, which is why lookups go
/// through a [`ConceptAliasSet`] rather than a single key.
///
/// A label either is absent from the table or maps to a non-empty period
/// sequence; rows with no values are dropped on construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LabeledStatementTable {
    rows: Vec<(String, Vec<Value>)>,
}

impl LabeledStatementTable {
    /// Builds a table from a provider payload of `{label: [values, ...]}`.
    ///
    /// Period values are kept as raw JSON; coercion happens at read time so
    /// that nulls and string-wrapped numbers in individual cells never
    /// poison the rest of the table.
    ///
    /// # Errors
    ///
    /// Returns [`FvError::Data`] if `payload` is not a JSON object.
    pub fn from_json(payload: &Value) -> Result<Self, FvError> {
        let obj = payload
            .as_object()
            .ok_or_else(|| FvError::Data("statement table payload is not an object".into()))?;

        let rows = obj
            .iter()
            .filter_map(|(label, values)| {
                let periods = values.as_array()?;
                if periods.is_empty() {
                    return None;
                }
                Some((label.clone(), periods.clone()))
            })
            .collect();

        Ok(Self { rows })
    }

    /// Builds a table from literal rows, mainly for operator input and tests.
    ///
    /// Empty rows are dropped, matching [`from_json`](Self::from_json).
    pub fn from_rows<I, L>(rows: I) -> Self
    where
        I: IntoIterator<Item = (L, Vec<f64>)>,
        L: Into<String>,
    {
        let rows = rows
            .into_iter()
            .filter_map(|(label, values)| {
                if values.is_empty() {
                    return None;
                }
                let periods = values.into_iter().map(Value::from).collect();
                Some((label.into(), periods))
            })
            .collect();

        Self { rows }
    }

    /// Returns `true` if the table has no rows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of period columns in the widest row.
    ///
    /// Providers may report fewer periods for some line items; the widest
    /// row bounds how far back a trailing lookup can reach.
    #[must_use]
    pub fn period_count(&self) -> usize {
        self.rows.iter().map(|(_, p)| p.len()).max().unwrap_or(0)
    }

    /// The period sequence for an exact label, if the label is present.
    pub(crate) fn periods(&self, label: &str) -> Option<&[Value]> {
        self.rows
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, p)| p.as_slice())
    }
}

/// An ordered list of acceptable provider labels for one canonical concept.
///
/// Order encodes preference: the first label present in a table wins, and
/// the tie-break is always declaration order, never "most complete" or
/// "most recent".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConceptAliasSet {
    name: &'static str,
    labels: &'static [&'static str],
}

impl ConceptAliasSet {
    /// Creates an alias set for a named concept.
    #[must_use]
    pub const fn new(name: &'static str, labels: &'static [&'static str]) -> Self {
        Self { name, labels }
    }

    /// The canonical concept name (for diagnostics).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The candidate labels, most-preferred first.
    #[must_use]
    pub const fn labels(&self) -> &'static [&'static str] {
        self.labels
    }
}

/* ----- Built-in alias sets for the concepts the assembler resolves ----- */

/// Revenue line items on the income statement.
pub const REVENUE: ConceptAliasSet =
    ConceptAliasSet::new("revenue", &["Total Revenue", "Revenue"]);

/// Net income line items on the income statement.
pub const NET_INCOME: ConceptAliasSet = ConceptAliasSet::new(
    "net income",
    &["Net Income", "Net Income Common Stockholders"],
);

/// Shareholder-equity line items on the balance sheet.
///
/// Providers spell this concept many ways; the list covers the spellings
/// seen in the wild, most common first.
pub const EQUITY: ConceptAliasSet = ConceptAliasSet::new(
    "equity",
    &[
        "Total Stockholder Equity",
        "Total Equity",
        "Stockholders Equity",
        "Total shareholders' equity",
        "Total Shareholders Equity",
        "Ordinary Shares",
        "Total liabilities and equity",
    ],
);
