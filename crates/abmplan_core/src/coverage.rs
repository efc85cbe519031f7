//! Coverage and capacity resolution.
//!
//! Determines how many target accounts the programme can actively treat and
//! how concentrated the effort on them is. Capacity comes from one of two
//! sources — programme budget against a per-tier benchmark cost, or team
//! hours against a per-account time cost — and is capped by in-market
//! demand. The intensity factor `coverage_rate ^ exponent` models the
//! diminishing returns of spreading a fixed motion across more accounts.

use crate::model::{
    BindingConstraint, CapacityInputs, CapacitySource, CoverageOutputs, MarketFunnelInputs,
    ProgrammeCosts, TeamBottleneck, MONTHLY_MARKETING_HOURS_PER_FTE, MONTHLY_SALES_HOURS_PER_FTE,
};
use crate::numeric::{clamp_unit, floor_zero, to_decimal};

/// Resolve coverage for a scenario.
///
/// With no target accounts every output is zero and nothing divides.
#[must_use]
pub fn resolve_coverage(
    market: &MarketFunnelInputs,
    costs: &ProgrammeCosts,
    capacity: &CapacityInputs,
) -> CoverageOutputs {
    let benchmark_cost = capacity.benchmarks.cost_per_account(capacity.tier);

    if market.target_accounts == 0 {
        return CoverageOutputs::empty(benchmark_cost, capacity.benchmarks);
    }

    let (account_capacity, team_bottleneck) = match capacity.source {
        CapacitySource::Budget => (budget_capacity(costs, benchmark_cost), None),
        CapacitySource::Team => {
            let (cap, bottleneck) = team_capacity(capacity);
            (cap, Some(bottleneck))
        }
    };

    let requested = requested_accounts(market);
    let treated = requested.min(account_capacity);

    let constraint = if account_capacity < requested {
        match capacity.source {
            CapacitySource::Budget => BindingConstraint::Budget,
            CapacitySource::Team => BindingConstraint::TeamTime,
        }
    } else if account_capacity > requested {
        BindingConstraint::Demand
    } else {
        BindingConstraint::Balanced
    };

    let coverage_rate = clamp_unit(f64::from(treated) / f64::from(market.target_accounts));
    let intensity_factor = clamp_unit(coverage_rate.powf(capacity.intensity_exponent));

    CoverageOutputs {
        requested_accounts: requested,
        account_capacity,
        treated_accounts: treated,
        coverage_rate,
        intensity_factor,
        constraint,
        team_bottleneck,
        benchmark_cost_per_account: benchmark_cost,
        benchmarks: capacity.benchmarks,
    }
}

/// In-market accounts requesting treatment.
fn requested_accounts(market: &MarketFunnelInputs) -> u32 {
    let requested =
        floor_zero(f64::from(market.target_accounts) * to_decimal(market.in_market_rate_pct));
    requested.round() as u32
}

/// Accounts the budget can fund at the tier benchmark cost.
fn budget_capacity(costs: &ProgrammeCosts, benchmark_cost: f64) -> u32 {
    if benchmark_cost <= 0.0 {
        return 0;
    }
    floor_zero((costs.total() / benchmark_cost).floor()) as u32
}

/// Accounts the team can staff, bounded by the scarcer function's hours.
fn team_capacity(capacity: &CapacityInputs) -> (u32, TeamBottleneck) {
    let utilisation = to_decimal(capacity.utilisation_pct);
    let marketing_hours =
        floor_zero(capacity.marketing_fte * MONTHLY_MARKETING_HOURS_PER_FTE * utilisation);
    let sales_hours = floor_zero(capacity.sales_fte * MONTHLY_SALES_HOURS_PER_FTE * utilisation);

    let bottleneck = if marketing_hours < sales_hours {
        TeamBottleneck::Marketing
    } else if sales_hours < marketing_hours {
        TeamBottleneck::Sales
    } else {
        TeamBottleneck::Balanced
    };

    if capacity.hours_per_account <= 0.0 {
        return (0, bottleneck);
    }

    let hours = marketing_hours.min(sales_hours);
    let cap = floor_zero((hours / capacity.hours_per_account).floor()) as u32;
    (cap, bottleneck)
}
