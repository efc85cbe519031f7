//! Tests for the treated/untreated blend invariants
//!
//! These tests verify:
//! - The partition exactly reconstructs the baseline before uplifts
//! - Full coverage collapses the blend to whole-list uplift math
//! - Monotonicity of ABM outputs in the win-rate uplift
//! - Non-negativity across hostile input combinations

use crate::config::{ScenarioBuilder, ScenarioConfig};
use crate::funnel::{calculate_abm, calculate_baseline};
use crate::model::{ProgrammeTier, UpliftInputs};
use crate::numeric::to_decimal;
use crate::scenario::evaluate_scenario;

const EPS: f64 = 1e-9;

fn partial_coverage_config() -> ScenarioConfig {
    // Budget source at the 1:few benchmark: 470k funds 20 of the 53
    // requested accounts, so the blend genuinely has both halves.
    ScenarioBuilder::new()
        .duration_months(12)
        .ramp_months(3)
        .target_accounts(150)
        .in_market_rate(35.0)
        .baseline_win_rate(22.0)
        .baseline_acv(65_000.0)
        .contribution_margin(55.0)
        .sales_cycles(9.0, 6.0)
        .win_rate_uplift(12.0)
        .acv_uplift(18.0)
        .opportunity_uplift(25.0)
        .cost_media(470_000.0)
        .tier(ProgrammeTier::OneToFew)
        .build()
        .unwrap()
}

#[test]
fn test_zero_uplift_blend_reconstructs_baseline() {
    // With all uplifts at zero the treated slice performs at baseline
    // rates, so treated + untreated must reproduce the whole-list baseline
    // for every metric.
    let mut config = partial_coverage_config();
    config.uplifts = UpliftInputs {
        win_rate_uplift_pp: 0.0,
        acv_uplift_pct: 0.0,
        opportunity_uplift_pct: 0.0,
    };
    let result = evaluate_scenario(&config);
    assert!(result.coverage.treated_accounts > 0);
    assert!(result.coverage.treated_accounts < config.market.target_accounts);

    let baseline = result.baseline;
    let abm = result.abm;
    assert!((abm.in_market_accounts - baseline.in_market_accounts).abs() < EPS);
    assert!((abm.qualified_opportunities - baseline.qualified_opportunities).abs() < EPS);
    assert!((abm.expected_wins - baseline.expected_wins).abs() < EPS);
    assert!((abm.revenue - baseline.revenue).abs() < EPS);
    assert!((abm.gross_profit - baseline.gross_profit).abs() < EPS);
}

#[test]
fn test_uplift_moves_only_the_treated_slice() {
    let config = partial_coverage_config();
    let result = evaluate_scenario(&config);
    let treated_share = f64::from(result.coverage.treated_accounts)
        / f64::from(config.market.target_accounts);

    // ABM beats baseline, but by less than a whole-list uplift would,
    // because only the treated slice moved.
    assert!(result.abm.revenue > result.baseline.revenue);
    let whole_list_gain_bound = result.baseline.revenue
        * (1.0 + to_decimal(config.uplifts.opportunity_uplift_pct))
        * (1.0 + to_decimal(config.uplifts.acv_uplift_pct))
        * 2.0;
    assert!(result.abm.revenue < whole_list_gain_bound);
    assert!(treated_share < 1.0);
}

#[test]
fn test_full_coverage_collapses_to_whole_list_uplift() {
    // Full coverage at intensity 1: the blend must equal applying the
    // uplift formulas directly to the whole baseline, with no residual.
    let market = partial_coverage_config().market;
    let baseline = calculate_baseline(&market);
    let uplifts = UpliftInputs {
        win_rate_uplift_pp: 12.0,
        acv_uplift_pct: 18.0,
        opportunity_uplift_pct: 25.0,
    };
    let coverage = crate::model::CoverageOutputs {
        requested_accounts: 150,
        account_capacity: 150,
        treated_accounts: 150,
        coverage_rate: 1.0,
        intensity_factor: 1.0,
        constraint: crate::model::BindingConstraint::Balanced,
        team_bottleneck: None,
        benchmark_cost_per_account: 23_500.0,
        benchmarks: crate::model::TierBenchmarks::default(),
    };
    let abm = calculate_abm(&market, &baseline, &uplifts, &coverage, None);

    let expected_opps = baseline.qualified_opportunities * 1.25;
    let expected_win_rate = to_decimal(market.baseline_win_rate_pct) + 0.12;
    let expected_wins = expected_opps * expected_win_rate;
    let expected_acv = market.baseline_acv * 1.18;
    let expected_revenue = expected_wins * expected_acv;

    assert!((abm.qualified_opportunities - expected_opps).abs() < EPS);
    assert!((abm.expected_wins - expected_wins).abs() < EPS);
    assert!((abm.acv - expected_acv).abs() < EPS);
    assert!((abm.revenue - expected_revenue).abs() < 1e-6);
}

#[test]
fn test_abm_wins_monotone_in_win_uplift() {
    let config = partial_coverage_config();
    let mut previous_wins = 0.0;
    let mut previous_revenue = 0.0;
    for uplift in [0.0, 4.0, 8.0, 12.0, 16.0, 20.0] {
        let mut scenario = config.clone();
        scenario.uplifts.win_rate_uplift_pp = uplift;
        let result = evaluate_scenario(&scenario);
        assert!(result.abm.expected_wins >= previous_wins);
        assert!(result.abm.revenue >= previous_revenue);
        previous_wins = result.abm.expected_wins;
        previous_revenue = result.abm.revenue;
    }
}

#[test]
fn test_outputs_non_negative_across_input_sweep() {
    // Sweep a hostile corner of the input space (including values the
    // validator would reject) and confirm no count or currency output ever
    // goes negative or non-finite.
    let base = partial_coverage_config();
    for targets in [0u32, 1, 150, 2000] {
        for rate in [0.0, 35.0, 70.0] {
            for acv_uplift in [-30.0, 0.0, 100.0] {
                let mut config = base.clone();
                config.market.target_accounts = targets;
                config.market.in_market_rate_pct = rate;
                config.uplifts.acv_uplift_pct = acv_uplift;
                let result = evaluate_scenario(&config);

                for value in [
                    result.baseline.in_market_accounts,
                    result.baseline.revenue,
                    result.baseline.gross_profit,
                    result.abm.qualified_opportunities,
                    result.abm.expected_wins,
                    result.abm.revenue,
                    result.abm.gross_profit,
                    result.abm.acv,
                    result.incremental.incremental_revenue,
                    result.incremental.incremental_gross_profit,
                    result.incremental.total_cost,
                ] {
                    assert!(value.is_finite(), "non-finite output for targets={targets} rate={rate}");
                    assert!(value >= 0.0, "negative output for targets={targets} rate={rate}");
                }
            }
        }
    }
}
