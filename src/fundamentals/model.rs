use serde::{Deserialize, Serialize};

/// Canonical fundamentals for one company at one point in time.
///
/// Every field is a finite number; anything the provider data could not
/// supply resolves to `0.0` rather than an absent value, so downstream
/// arithmetic never has to distinguish "missing" from "zero".
///
/// An operator override is an immutable substitution: the `with_*` methods
/// consume a copy and return a new value with the one field replaced, so
/// the originally resolved record stays inspectable.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResolvedFundamentals {
    /// Shares outstanding, in millions.
    pub shares_millions: f64,
    /// Most recent traded price.
    pub last_price: f64,
    /// Trailing annual revenue.
    pub revenue: f64,
    /// Trailing annual net income.
    pub net_income: f64,
    /// Total shareholder equity from the most recent balance sheet.
    pub equity: f64,
    /// Return on equity for the most recent period, in percent.
    pub roe_annual: f64,
    /// Mean return on equity over up to five recent periods, in percent.
    ///
    /// Periods with zero equity are skipped, not counted as zero, so data
    /// gaps do not drag the average down.
    pub roe_avg_5y: f64,
    /// Earnings-per-share growth over five years, in percent.
    pub eps_growth_5y: f64,
    /// Annual sales-per-share growth, in percent.
    pub sps_growth_annual: f64,
    /// Five-year sales-per-share growth, in percent.
    ///
    /// Profile-level data does not distinguish this from the annual figure,
    /// so both fields carry the same source value unless overridden.
    pub sps_growth_5y: f64,
    /// Dividend payout ratio, in percent.
    pub payout_ratio: f64,
    /// Average price-to-book multiple.
    pub avg_pbv: f64,
    /// Average price-to-earnings multiple.
    pub avg_per: f64,
    /// Average price-to-sales multiple.
    pub avg_psr: f64,
}

impl ResolvedFundamentals {
    /// Returns a copy with the share count (in millions) replaced.
    #[must_use]
    pub const fn with_shares_millions(mut self, value: f64) -> Self {
        self.shares_millions = value;
        self
    }

    /// Returns a copy with the last price replaced.
    #[must_use]
    pub const fn with_last_price(mut self, value: f64) -> Self {
        self.last_price = value;
        self
    }

    /// Returns a copy with the revenue replaced.
    #[must_use]
    pub const fn with_revenue(mut self, value: f64) -> Self {
        self.revenue = value;
        self
    }

    /// Returns a copy with the net income replaced.
    #[must_use]
    pub const fn with_net_income(mut self, value: f64) -> Self {
        self.net_income = value;
        self
    }

    /// Returns a copy with the equity replaced.
    #[must_use]
    pub const fn with_equity(mut self, value: f64) -> Self {
        self.equity = value;
        self
    }

    /// Returns a copy with the annual ROE (%) replaced.
    #[must_use]
    pub const fn with_roe_annual(mut self, value: f64) -> Self {
        self.roe_annual = value;
        self
    }

    /// Returns a copy with the trailing-average ROE (%) replaced.
    #[must_use]
    pub const fn with_roe_avg_5y(mut self, value: f64) -> Self {
        self.roe_avg_5y = value;
        self
    }

    /// Returns a copy with the five-year EPS growth (%) replaced.
    #[must_use]
    pub const fn with_eps_growth_5y(mut self, value: f64) -> Self {
        self.eps_growth_5y = value;
        self
    }

    /// Returns a copy with the annual SPS growth (%) replaced.
    #[must_use]
    pub const fn with_sps_growth_annual(mut self, value: f64) -> Self {
        self.sps_growth_annual = value;
        self
    }

    /// Returns a copy with the five-year SPS growth (%) replaced.
    #[must_use]
    pub const fn with_sps_growth_5y(mut self, value: f64) -> Self {
        self.sps_growth_5y = value;
        self
    }

    /// Returns a copy with the dividend payout ratio (%) replaced.
    #[must_use]
    pub const fn with_payout_ratio(mut self, value: f64) -> Self {
        self.payout_ratio = value;
        self
    }

    /// Returns a copy with the average price-to-book multiple replaced.
    #[must_use]
    pub const fn with_avg_pbv(mut self, value: f64) -> Self {
        self.avg_pbv = value;
        self
    }

    /// Returns a copy with the average price-to-earnings multiple replaced.
    #[must_use]
    pub const fn with_avg_per(mut self, value: f64) -> Self {
        self.avg_per = value;
        self
    }

    /// Returns a copy with the average price-to-sales multiple replaced.
    #[must_use]
    pub const fn with_avg_psr(mut self, value: f64) -> Self {
        self.avg_psr = value;
        self
    }
}
