//! Funnel calculators: baseline and ABM.
//!
//! The baseline calculator is plain funnel math over the whole target list
//! with no ABM influence. The ABM calculator applies intensity-scaled
//! uplifts to the *treated* subset only; the untreated remainder keeps
//! performing at baseline rates and the two are recombined. That partition
//! is the rule that separates a concentrated ABM motion from uniformly
//! uplifting the whole list: with full coverage (intensity 1) the blend
//! collapses to uplifting the entire baseline, with partial coverage only
//! the treated slice moves.

use crate::model::{
    AbmOutputs, AlignmentInputs, AlignmentMultipliers, BaselineOutputs, CoverageOutputs,
    MarketFunnelInputs, UpliftInputs,
};
use crate::numeric::{clamp_unit, floor_zero, to_decimal};

/// Baseline funnel over the full target list.
#[must_use]
pub fn calculate_baseline(market: &MarketFunnelInputs) -> BaselineOutputs {
    baseline_for_population(market, f64::from(market.target_accounts))
}

/// Baseline funnel math over an arbitrary account population at the
/// scenario's rates. Shared by the whole-list baseline and the ABM
/// calculator's treated-subset synthetic population.
fn baseline_for_population(market: &MarketFunnelInputs, accounts: f64) -> BaselineOutputs {
    let in_market_accounts = floor_zero(accounts * to_decimal(market.in_market_rate_pct));
    let qualified_opportunities =
        floor_zero(in_market_accounts * market.qualified_opps_per_account);
    let expected_wins =
        floor_zero(qualified_opportunities * to_decimal(market.baseline_win_rate_pct));
    let revenue = floor_zero(expected_wins * market.baseline_acv);
    let gross_profit = floor_zero(revenue * to_decimal(market.contribution_margin_pct));

    BaselineOutputs {
        in_market_accounts,
        qualified_opportunities,
        expected_wins,
        revenue,
        gross_profit,
    }
}

/// ABM funnel: uplifted treated subset plus baseline-rate untreated
/// remainder.
///
/// `alignment` is the optional sales/marketing alignment refinement; absent
/// alignment is neutral and reproduces the simpler coverage generation.
#[must_use]
pub fn calculate_abm(
    market: &MarketFunnelInputs,
    baseline: &BaselineOutputs,
    uplifts: &UpliftInputs,
    coverage: &CoverageOutputs,
    alignment: Option<&AlignmentInputs>,
) -> AbmOutputs {
    let align = alignment.map_or(AlignmentMultipliers::NEUTRAL, AlignmentInputs::multipliers);
    let intensity = coverage.intensity_factor;

    // Partition the baseline: treated slice at scenario rates, untreated
    // remainder as the floored componentwise difference. The two halves
    // reconstruct the baseline exactly before any uplift is layered on.
    let treated_base = baseline_for_population(market, f64::from(coverage.treated_accounts));
    let untreated = BaselineOutputs {
        in_market_accounts: floor_zero(baseline.in_market_accounts - treated_base.in_market_accounts),
        qualified_opportunities: floor_zero(
            baseline.qualified_opportunities - treated_base.qualified_opportunities,
        ),
        expected_wins: floor_zero(baseline.expected_wins - treated_base.expected_wins),
        revenue: floor_zero(baseline.revenue - treated_base.revenue),
        gross_profit: floor_zero(baseline.gross_profit - treated_base.gross_profit),
    };

    // Uplifts on the treated slice, each damped by intensity and scaled by
    // its alignment multiplier.
    let opportunity_multiplier =
        1.0 + to_decimal(uplifts.opportunity_uplift_pct) * intensity * align.opportunity;
    let treated_opportunities =
        floor_zero(treated_base.qualified_opportunities * opportunity_multiplier);

    // Win uplift is an absolute percentage-point addition, clamped to a
    // valid probability.
    let effective_win_rate = clamp_unit(
        to_decimal(market.baseline_win_rate_pct)
            + to_decimal(uplifts.win_rate_uplift_pp) * intensity * align.win,
    );
    let treated_wins = floor_zero(treated_opportunities * effective_win_rate);

    let acv_multiplier = 1.0 + to_decimal(uplifts.acv_uplift_pct) * intensity;
    let treated_acv = floor_zero(market.baseline_acv * acv_multiplier);
    let treated_revenue = floor_zero(treated_wins * treated_acv);
    let treated_gross_profit =
        floor_zero(treated_revenue * to_decimal(market.contribution_margin_pct));

    let acv = if coverage.treated_accounts > 0 {
        treated_acv
    } else {
        floor_zero(market.baseline_acv)
    };

    AbmOutputs {
        in_market_accounts: floor_zero(
            untreated.in_market_accounts + treated_base.in_market_accounts,
        ),
        qualified_opportunities: floor_zero(
            untreated.qualified_opportunities + treated_opportunities,
        ),
        expected_wins: floor_zero(untreated.expected_wins + treated_wins),
        revenue: floor_zero(untreated.revenue + treated_revenue),
        gross_profit: floor_zero(untreated.gross_profit + treated_gross_profit),
        acv,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BindingConstraint, TierBenchmarks};

    fn example_market() -> MarketFunnelInputs {
        MarketFunnelInputs {
            target_accounts: 150,
            in_market_rate_pct: 35.0,
            qualified_opps_per_account: 1.0,
            baseline_win_rate_pct: 22.0,
            baseline_acv: 65_000.0,
            contribution_margin_pct: 55.0,
            baseline_sales_cycle_months: 9.0,
            abm_sales_cycle_months: 6.0,
        }
    }

    fn full_coverage(treated: u32) -> CoverageOutputs {
        CoverageOutputs {
            requested_accounts: treated,
            account_capacity: treated,
            treated_accounts: treated,
            coverage_rate: 1.0,
            intensity_factor: 1.0,
            constraint: BindingConstraint::Balanced,
            team_bottleneck: None,
            benchmark_cost_per_account: 23_500.0,
            benchmarks: TierBenchmarks::default(),
        }
    }

    #[test]
    fn test_baseline_reference_scenario() {
        let baseline = calculate_baseline(&example_market());
        assert!((baseline.in_market_accounts - 52.5).abs() < 1e-9);
        assert!((baseline.qualified_opportunities - 52.5).abs() < 1e-9);
        assert!((baseline.expected_wins - 11.55).abs() < 1e-9);
        assert!((baseline.revenue - 750_750.0).abs() < 1e-6);
        assert!((baseline.gross_profit - 412_912.5).abs() < 1e-6);
    }

    #[test]
    fn test_baseline_outputs_never_negative() {
        let market = MarketFunnelInputs {
            baseline_acv: -65_000.0,
            ..example_market()
        };
        let baseline = calculate_baseline(&market);
        assert_eq!(baseline.revenue, 0.0);
        assert_eq!(baseline.gross_profit, 0.0);
    }

    #[test]
    fn test_abm_reference_scenario_full_intensity() {
        let market = example_market();
        let baseline = calculate_baseline(&market);
        let uplifts = UpliftInputs {
            win_rate_uplift_pp: 12.0,
            acv_uplift_pct: 18.0,
            opportunity_uplift_pct: 25.0,
        };
        let abm = calculate_abm(&market, &baseline, &uplifts, &full_coverage(150), None);

        // 52.5 opps * 1.25 = 65.625; win 34%; ACV 76 700.
        assert!((abm.qualified_opportunities - 65.625).abs() < 1e-9);
        assert!((abm.expected_wins - 22.3125).abs() < 1e-9);
        assert!((abm.acv - 76_700.0).abs() < 1e-6);
        assert!((abm.revenue - 1_711_368.75).abs() < 1e-6);
    }

    #[test]
    fn test_win_rate_clamped_to_probability() {
        let market = MarketFunnelInputs {
            baseline_win_rate_pct: 60.0,
            ..example_market()
        };
        let baseline = calculate_baseline(&market);
        // Deliberately out-of-range uplift: validation would reject it, the
        // clamp still holds.
        let uplifts = UpliftInputs {
            win_rate_uplift_pp: 80.0,
            acv_uplift_pct: 0.0,
            opportunity_uplift_pct: 0.0,
        };
        let abm = calculate_abm(&market, &baseline, &uplifts, &full_coverage(150), None);
        // Effective win rate capped at 100%: wins equal opportunities.
        assert!((abm.expected_wins - abm.qualified_opportunities).abs() < 1e-9);
    }

    #[test]
    fn test_zero_treated_reports_baseline_acv() {
        let market = example_market();
        let baseline = calculate_baseline(&market);
        let coverage = CoverageOutputs {
            requested_accounts: 53,
            account_capacity: 0,
            treated_accounts: 0,
            coverage_rate: 0.0,
            intensity_factor: 0.0,
            constraint: BindingConstraint::Budget,
            team_bottleneck: None,
            benchmark_cost_per_account: 23_500.0,
            benchmarks: TierBenchmarks::default(),
        };
        let abm = calculate_abm(
            &market,
            &baseline,
            &UpliftInputs::default(),
            &coverage,
            None,
        );
        assert_eq!(abm.acv, market.baseline_acv);
        // Nothing treated: ABM equals baseline.
        assert!((abm.revenue - baseline.revenue).abs() < 1e-9);
        assert!((abm.expected_wins - baseline.expected_wins).abs() < 1e-9);
    }

    #[test]
    fn test_alignment_scales_realized_uplift() {
        let market = example_market();
        let baseline = calculate_baseline(&market);
        let uplifts = UpliftInputs {
            win_rate_uplift_pp: 10.0,
            acv_uplift_pct: 0.0,
            opportunity_uplift_pct: 0.0,
        };
        let poor = AlignmentInputs {
            level: crate::model::AlignmentLevel::Poor,
            custom_multipliers: None,
        };
        let excellent = AlignmentInputs {
            level: crate::model::AlignmentLevel::Excellent,
            custom_multipliers: None,
        };
        let coverage = full_coverage(150);
        let with_poor = calculate_abm(&market, &baseline, &uplifts, &coverage, Some(&poor));
        let neutral = calculate_abm(&market, &baseline, &uplifts, &coverage, None);
        let with_excellent =
            calculate_abm(&market, &baseline, &uplifts, &coverage, Some(&excellent));
        assert!(with_poor.expected_wins < neutral.expected_wins);
        assert!(neutral.expected_wins < with_excellent.expected_wins);
    }
}
