//! Calculation outputs.
//!
//! Every type here is a plain immutable value recomputed from scratch on
//! each input change. Ratios that cannot be computed from the current inputs
//! are `None` — serialized as JSON `null` for the display layer — which is
//! deliberately distinct from `0.0` (a computed value) and from an error.

use serde::{Deserialize, Serialize};

use super::TierBenchmarks;
use crate::config::ScenarioConfig;

/// Which resource ended up limiting the treated-account count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingConstraint {
    /// Budget capacity fell short of in-market demand.
    Budget,
    /// Team hours fell short of in-market demand.
    TeamTime,
    /// Capacity exceeded demand; the in-market account count binds.
    Demand,
    /// Capacity exactly matches demand (including the no-targets case).
    Balanced,
}

/// Which function runs out of hours first under the team capacity source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamBottleneck {
    Marketing,
    Sales,
    Balanced,
}

/// Resolved coverage and capacity for a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageOutputs {
    /// In-market accounts requesting treatment:
    /// `round(target_accounts × in_market_rate)`.
    pub requested_accounts: u32,
    /// Accounts the selected capacity source can treat.
    pub account_capacity: u32,
    /// Accounts actually treated: `min(requested, capacity)`.
    pub treated_accounts: u32,
    /// `treated / target`, in `[0, 1]`; `0` when there are no targets.
    pub coverage_rate: f64,
    /// `coverage_rate ^ intensity_exponent`, in `[0, 1]`.
    pub intensity_factor: f64,
    /// The limiting resource.
    pub constraint: BindingConstraint,
    /// Marketing-vs-sales bottleneck; `None` under the budget source.
    pub team_bottleneck: Option<TeamBottleneck>,
    /// Benchmark cost per account used on the budget path.
    pub benchmark_cost_per_account: f64,
    /// The benchmark table the resolution used.
    pub benchmarks: TierBenchmarks,
}

impl CoverageOutputs {
    /// All-zero coverage for a scenario with no target accounts.
    #[must_use]
    pub fn empty(benchmark_cost_per_account: f64, benchmarks: TierBenchmarks) -> Self {
        Self {
            requested_accounts: 0,
            account_capacity: 0,
            treated_accounts: 0,
            coverage_rate: 0.0,
            intensity_factor: 0.0,
            constraint: BindingConstraint::Balanced,
            team_bottleneck: None,
            benchmark_cost_per_account,
            benchmarks,
        }
    }
}

/// Funnel metrics for the no-ABM scenario.
///
/// Fractional accounts and wins are valid: these are expected values, and
/// only display layers round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BaselineOutputs {
    pub in_market_accounts: f64,
    pub qualified_opportunities: f64,
    pub expected_wins: f64,
    pub revenue: f64,
    pub gross_profit: f64,
}

/// Funnel metrics for the ABM scenario.
///
/// Computed by blending an uplifted treated subset with an untreated
/// remainder that performs at baseline rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AbmOutputs {
    pub in_market_accounts: f64,
    pub qualified_opportunities: f64,
    pub expected_wins: f64,
    pub revenue: f64,
    pub gross_profit: f64,
    /// ACV on treated accounts when any account is treated, else the
    /// baseline ACV — there is no blended figure when nothing was treated.
    pub acv: f64,
}

/// Comparative and financial metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncrementalOutputs {
    /// Total programme cost after the category/override rule.
    pub total_cost: f64,
    pub incremental_revenue: f64,
    pub incremental_gross_profit: f64,
    /// `(incremental gross profit − cost) / cost`; `None` without spend.
    pub roi: Option<f64>,
    /// `incremental gross profit / cost`; `None` without spend.
    pub gross_romi: Option<f64>,
    /// Minimum ABM wins whose gross profit recoups the cost; `None` without
    /// spend or without positive per-win profit.
    pub break_even_wins: Option<u32>,
    /// Baseline-to-ABM sales-cycle ratio; `None` when the ABM cycle is zero.
    pub velocity_factor: Option<f64>,
    /// Months for velocity-adjusted incremental profit to repay the cost;
    /// `None` whenever any contributor is non-positive.
    pub payback_months: Option<f64>,
}

/// Advisory warning attached to a scenario result.
///
/// The core pipeline does not currently emit guardrails; the type exists so
/// the display layer and future engine checks share one vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guardrail {
    pub kind: GuardrailKind,
    pub message: String,
}

/// Classification of advisory warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardrailKind {
    /// Treated accounts fall well short of in-market demand.
    LowCoverage,
    /// Uplift assumptions sit at or beyond their input ceilings.
    AggressiveUplift,
    /// Programme cost is large relative to projected incremental profit.
    ThinReturn,
}

/// Complete result bundle for one scenario: the inputs it was computed from
/// plus every derived section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub inputs: ScenarioConfig,
    pub coverage: CoverageOutputs,
    pub baseline: BaselineOutputs,
    pub abm: AbmOutputs,
    pub incremental: IncrementalOutputs,
    /// Reserved for advisory warnings; currently always empty.
    #[serde(default)]
    pub guardrails: Vec<Guardrail>,
}
