use serde::{Deserialize, Serialize};

/* ----- PRICE HISTORY (last-resort source for the current price) ----- */

/// One closing-price observation from a price-history series.
///
/// The series is ordered oldest-first; only the most recent close is ever
/// consulted, and only when the profile record lacks a usable price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosePrice {
    /// Unix timestamp (seconds) of the session close.
    pub ts: i64,
    /// Closing price for the session.
    pub close: f64,
}
