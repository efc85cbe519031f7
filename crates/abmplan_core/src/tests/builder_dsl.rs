//! Tests for the scenario builder and the validation boundary
//!
//! These tests verify:
//! - Fluent construction with section defaults
//! - Range checks on every input section
//! - Cross-field constraints (ramp vs duration, cycle ordering,
//!   investment signal)

use crate::config::ScenarioBuilder;
use crate::error::ValidationError;
use crate::model::{CapacitySource, ProgrammeTier};

fn valid_builder() -> ScenarioBuilder {
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
}

#[test]
fn test_valid_scenario_builds() {
    let config = valid_builder().build().unwrap();
    assert_eq!(config.programme.duration_months, 12);
    assert_eq!(config.market.target_accounts, 150);
    assert_eq!(config.costs.total(), 470_000.0);
    // Untouched sections keep their defaults.
    assert_eq!(config.capacity.source, CapacitySource::Budget);
    assert_eq!(config.capacity.tier, ProgrammeTier::OneToFew);
    assert!(config.alignment.is_none());
}

#[test]
fn test_ramp_must_not_exceed_duration() {
    let err = valid_builder()
        .duration_months(6)
        .ramp_months(9)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::RampExceedsDuration {
            ramp_months: 9,
            duration_months: 6
        }
    );
}

#[test]
fn test_abm_cycle_must_not_exceed_baseline() {
    let err = valid_builder().sales_cycles(6.0, 9.0).build().unwrap_err();
    assert!(matches!(err, ValidationError::AbmCycleExceedsBaseline { .. }));
}

#[test]
fn test_scenario_needs_investment_signal() {
    let err = valid_builder().cost_media(0.0).build().unwrap_err();
    assert_eq!(err, ValidationError::MissingInvestmentSignal);

    // An override alone is a valid signal.
    let config = valid_builder()
        .cost_media(0.0)
        .total_cost_override(250_000.0)
        .build()
        .unwrap();
    assert_eq!(config.costs.total(), 250_000.0);
}

#[test]
fn test_range_violations_name_the_field() {
    let err = valid_builder().in_market_rate(85.0).build().unwrap_err();
    match err {
        ValidationError::FieldOutOfRange { field, value, .. } => {
            assert_eq!(field, "market.in_market_rate_pct");
            assert_eq!(value, 85.0);
        }
        other => panic!("expected range error, got {other:?}"),
    }

    assert!(valid_builder().target_accounts(5_000).build().is_err());
    assert!(valid_builder().baseline_win_rate(75.0).build().is_err());
    assert!(valid_builder().win_rate_uplift(30.0).build().is_err());
    assert!(valid_builder().acv_uplift(-40.0).build().is_err());
    assert!(valid_builder().contribution_margin(99.0).build().is_err());
}

#[test]
fn test_negative_money_rejected() {
    let err = valid_builder().baseline_acv(-1.0).build().unwrap_err();
    assert!(matches!(err, ValidationError::NegativeField { .. }));

    assert!(valid_builder().cost_people(-10.0).build().is_err());
    assert!(valid_builder().hours_per_account(-1.0).build().is_err());
}

#[test]
fn test_empty_sensitivity_range_rejected() {
    let err = valid_builder()
        .sensitivity_ranges(vec![], vec![4.0, 8.0])
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::EmptySensitivityRange {
            axis: "in_market_rates_pct"
        }
    );
}

#[test]
fn test_resolution_hint_bounds() {
    assert!(valid_builder()
        .sensitivity_resolution_hint(7)
        .build()
        .is_ok());
    assert!(valid_builder()
        .sensitivity_resolution_hint(2)
        .build()
        .is_err());
}

#[test]
fn test_non_finite_input_rejected() {
    // The boundary rejects non-finite values before the engine ever sees
    // them.
    assert!(valid_builder().baseline_acv(f64::NAN).build().is_err());
    assert!(valid_builder().in_market_rate(f64::INFINITY).build().is_err());
}

#[test]
fn test_derived_in_market_rate_is_capped() {
    // 12-month programme, 3-month ramp, 3-month buying window, 5%
    // point-in-time rate: derives to roughly 14%.
    let config = valid_builder()
        .derive_in_market_rate(3.0, 5.0)
        .build()
        .unwrap();
    assert!(config.market.in_market_rate_pct > 13.0);
    assert!(config.market.in_market_rate_pct < 15.0);

    // An extreme point-in-time rate derives above the ceiling and is capped
    // at the 70% display policy, which also keeps it in the valid range.
    let config = valid_builder()
        .duration_months(24)
        .ramp_months(0)
        .derive_in_market_rate(1.0, 50.0)
        .build()
        .unwrap();
    assert_eq!(config.market.in_market_rate_pct, 70.0);
}

#[test]
fn test_from_config_roundtrip() {
    let config = valid_builder().build().unwrap();
    let variant = ScenarioBuilder::from_config(config.clone())
        .target_accounts(300)
        .build()
        .unwrap();
    assert_eq!(variant.market.target_accounts, 300);
    // Everything else is untouched.
    assert_eq!(variant.costs, config.costs);
    assert_eq!(variant.programme, config.programme);
}
