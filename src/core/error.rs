use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FvError {
    /// Both statement tables were empty, so nothing could be resolved for
    /// the company.
    ///
    /// This is the only condition that escalates past the core: callers are
    /// expected to fall back to operator-supplied fundamentals (see
    /// [`ResolvedFundamentals`](crate::ResolvedFundamentals) and its
    /// `with_*` methods).
    #[error("no usable statement data: income statement and balance sheet are both empty")]
    UnavailableFundamentals,

    /// A provider payload was in an unexpected shape (e.g. a statement
    /// table that is not a JSON object).
    #[error("Data format unexpected: {0}")]
    Data(String),
}
