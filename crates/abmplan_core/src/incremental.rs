//! Incremental and financial metrics.
//!
//! Compares the ABM scenario against the baseline and prices the delta:
//! ROI, gross ROMI, break-even wins, velocity factor, and payback months.
//! Every ratio guards its denominator — a non-computable metric is `None`,
//! never `NaN`, infinity, or a sentinel zero.

use crate::model::{
    AbmOutputs, AlignmentInputs, AlignmentMultipliers, BaselineOutputs, IncrementalOutputs,
    MarketFunnelInputs, ProgrammeCosts, ProgrammeSettings,
};
use crate::numeric::{floor_zero, to_decimal};

/// Price the ABM-vs-baseline delta against programme cost.
///
/// `alignment` contributes only its velocity multiplier here; `None` is
/// neutral.
#[must_use]
pub fn calculate_incremental(
    programme: &ProgrammeSettings,
    market: &MarketFunnelInputs,
    baseline: &BaselineOutputs,
    abm: &AbmOutputs,
    costs: &ProgrammeCosts,
    alignment: Option<&AlignmentInputs>,
) -> IncrementalOutputs {
    let total_cost = costs.total();
    let incremental_revenue = floor_zero(abm.revenue - baseline.revenue);
    let incremental_gross_profit = floor_zero(abm.gross_profit - baseline.gross_profit);

    let (roi, gross_romi) = if total_cost > 0.0 {
        (
            Some((incremental_gross_profit - total_cost) / total_cost),
            Some(incremental_gross_profit / total_cost),
        )
    } else {
        (None, None)
    };

    let break_even_wins = break_even_wins(total_cost, abm.acv, market.contribution_margin_pct);
    let velocity_factor = velocity_factor(market, alignment);
    let payback_months = payback_months(
        total_cost,
        incremental_gross_profit,
        programme.duration_months,
        velocity_factor,
    );

    IncrementalOutputs {
        total_cost,
        incremental_revenue,
        incremental_gross_profit,
        roi,
        gross_romi,
        break_even_wins,
        velocity_factor,
        payback_months,
    }
}

/// Minimum ABM wins whose gross profit recoups the programme cost.
///
/// `None` without spend or when a win carries no positive gross profit — a
/// zero or negative per-win figure makes the break-even concept undefined
/// rather than infinite.
fn break_even_wins(total_cost: f64, abm_acv: f64, contribution_margin_pct: f64) -> Option<u32> {
    if total_cost <= 0.0 {
        return None;
    }
    let gross_profit_per_win = abm_acv * to_decimal(contribution_margin_pct);
    if gross_profit_per_win <= 0.0 {
        return None;
    }
    Some((total_cost / gross_profit_per_win).ceil() as u32)
}

/// Baseline-to-ABM cycle-length ratio, scaled by the alignment velocity
/// multiplier. `None` when the ABM cycle is zero (nothing to divide by).
fn velocity_factor(
    market: &MarketFunnelInputs,
    alignment: Option<&AlignmentInputs>,
) -> Option<f64> {
    if market.abm_sales_cycle_months <= 0.0 {
        return None;
    }
    let align = alignment.map_or(AlignmentMultipliers::NEUTRAL, AlignmentInputs::multipliers);
    Some(market.baseline_sales_cycle_months / market.abm_sales_cycle_months * align.velocity)
}

/// Months for velocity-adjusted monthly incremental gross profit to repay
/// the programme cost. Any non-positive contributor makes payback
/// undefined, not infinite.
fn payback_months(
    total_cost: f64,
    incremental_gross_profit: f64,
    duration_months: u32,
    velocity_factor: Option<f64>,
) -> Option<f64> {
    if total_cost <= 0.0 || incremental_gross_profit <= 0.0 || duration_months == 0 {
        return None;
    }
    let velocity = velocity_factor?;
    if velocity <= 0.0 {
        return None;
    }
    let monthly = incremental_gross_profit / f64::from(duration_months) * velocity;
    if monthly <= 0.0 {
        return None;
    }
    Some(total_cost / monthly)
}
