use serde::Serialize;

/// The condensed investment summary for one projection run.
///
/// All percentage fields are guarded: a non-positive or non-finite input
/// resolves the affected field to `0.0` instead of propagating a NaN or an
/// infinity. The one exception is [`future_price`](Self::future_price)
/// itself, which stays NaN when every price estimate in the terminal row
/// was NaN; the derived percentages are `0.0` in that case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryMetrics {
    /// The price the summary compares against.
    pub last_price: f64,
    /// Blended terminal-year future price (mean of the three estimates,
    /// ignoring NaN entries).
    pub future_price: f64,
    /// Total gain/loss over the horizon, in percent.
    pub gain_loss_pct: f64,
    /// Gain/loss divided evenly over the horizon years, in percent.
    pub annual_return_pct: f64,
    /// Discount of the current price below the projected future price, in
    /// percent. Floored at zero by construction.
    pub margin_of_safety_pct: f64,
    /// Compound annual growth rate from current to future price, in percent.
    pub cagr_pct: f64,
}
