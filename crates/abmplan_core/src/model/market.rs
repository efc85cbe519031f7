//! Market funnel assumptions and ABM uplift ceilings.

use serde::{Deserialize, Serialize};

/// Baseline funnel assumptions for the target-account list.
///
/// Rates are user-facing percentages (`35.0` = 35%), converted to decimals
/// inside the calculators. Fractional intermediate values (e.g. 52.5
/// in-market accounts) are valid everywhere — only display layers round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketFunnelInputs {
    /// Accounts on the target list (0–2000).
    pub target_accounts: u32,
    /// Share of the list expected to enter an active buying cycle during the
    /// programme window, in percent (0–70). Either user-set or auto-derived
    /// via the in-market deriver.
    pub in_market_rate_pct: f64,
    /// Qualified opportunities generated per in-market account (0–3).
    pub qualified_opps_per_account: f64,
    /// Win rate with no ABM influence, in percent (0–60).
    pub baseline_win_rate_pct: f64,
    /// Annual contract value with no ABM influence, in programme currency.
    pub baseline_acv: f64,
    /// Contribution margin on revenue, in percent (0–95).
    pub contribution_margin_pct: f64,
    /// Sales-cycle length with no ABM influence, in months (0–24).
    pub baseline_sales_cycle_months: f64,
    /// Sales-cycle length under ABM, in months (0–24, never exceeds the
    /// baseline cycle).
    pub abm_sales_cycle_months: f64,
}

impl Default for MarketFunnelInputs {
    fn default() -> Self {
        Self {
            target_accounts: 100,
            in_market_rate_pct: 25.0,
            qualified_opps_per_account: 1.0,
            baseline_win_rate_pct: 20.0,
            baseline_acv: 50_000.0,
            contribution_margin_pct: 60.0,
            baseline_sales_cycle_months: 9.0,
            abm_sales_cycle_months: 9.0,
        }
    }
}

/// Uplift assumptions for treated accounts.
///
/// These are *ceiling* figures: the ABM calculator scales them by the
/// coverage intensity factor (and alignment multipliers) before they touch
/// the funnel, so a thinly-spread programme realizes only part of each
/// uplift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpliftInputs {
    /// Absolute win-rate addition in percentage points (0–20).
    pub win_rate_uplift_pp: f64,
    /// Relative ACV change in percent (−30–100). Negative values model
    /// land-and-expand motions that deliberately shrink the initial deal.
    pub acv_uplift_pct: f64,
    /// Relative increase in qualified opportunities in percent (0–100).
    pub opportunity_uplift_pct: f64,
}

impl Default for UpliftInputs {
    fn default() -> Self {
        Self {
            win_rate_uplift_pp: 8.0,
            acv_uplift_pct: 10.0,
            opportunity_uplift_pct: 20.0,
        }
    }
}
