//! Scenario configuration.
//!
//! [`ScenarioConfig`] is the single structured value the engine consumes: one
//! section per input area, all serde-serializable. The engine's calculation
//! functions assume a validated config; [`ScenarioConfig::validate`] and the
//! fluent [`ScenarioBuilder`] are the validation boundary that upholds that
//! assumption for callers.
//!
//! # Builder DSL
//!
//! ```ignore
//! use abmplan_core::config::ScenarioBuilder;
//! use abmplan_core::model::{CapacitySource, ProgrammeTier};
//!
//! let config = ScenarioBuilder::new()
//!     .duration_months(12)
//!     .ramp_months(3)
//!     .target_accounts(150)
//!     .in_market_rate(35.0)
//!     .baseline_win_rate(22.0)
//!     .baseline_acv(65_000.0)
//!     .contribution_margin(55.0)
//!     .sales_cycles(9.0, 6.0)
//!     .win_rate_uplift(12.0)
//!     .acv_uplift(18.0)
//!     .opportunity_uplift(25.0)
//!     .cost_people(180_000.0)
//!     .cost_media(150_000.0)
//!     .capacity_source(CapacitySource::Budget)
//!     .tier(ProgrammeTier::OneToFew)
//!     .build()?;
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::SensitivityConfig;
use crate::error::ValidationError;
use crate::model::{
    AlignmentInputs, CapacityInputs, CapacitySource, MarketFunnelInputs, ProgrammeCosts,
    ProgrammeSettings, UpliftInputs,
};

pub mod builder;

pub use builder::ScenarioBuilder;

/// Complete scenario input bundle.
///
/// Immutable during a calculation; every derived output is recomputed from
/// scratch on any change. The engine performs no validation of its own —
/// construct configs through [`ScenarioBuilder`] or call [`validate`]
/// (`Self::validate`) after deserializing external data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub programme: ProgrammeSettings,
    #[serde(default)]
    pub market: MarketFunnelInputs,
    #[serde(default)]
    pub uplifts: UpliftInputs,
    #[serde(default)]
    pub costs: ProgrammeCosts,
    #[serde(default)]
    pub capacity: CapacityInputs,
    /// Optional sales/marketing alignment refinement; absent means neutral.
    #[serde(default)]
    pub alignment: Option<AlignmentInputs>,
    #[serde(default)]
    pub sensitivity: SensitivityConfig,
}

fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::FieldOutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NegativeField { field, value })
    }
}

impl ScenarioConfig {
    /// Validate all range and cross-field constraints.
    ///
    /// Returns the first violation found, section by section in input order,
    /// so the boundary layer can point at one offending field at a time.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_programme()?;
        self.validate_market()?;
        self.validate_uplifts()?;
        self.validate_costs()?;
        self.validate_capacity()?;
        self.validate_alignment()?;
        self.sensitivity.validate()
    }

    fn validate_programme(&self) -> Result<(), ValidationError> {
        let p = &self.programme;
        check_range("programme.duration_months", f64::from(p.duration_months), 0.0, 24.0)?;
        check_range("programme.ramp_months", f64::from(p.ramp_months), 0.0, 24.0)?;
        if p.ramp_months > p.duration_months {
            return Err(ValidationError::RampExceedsDuration {
                ramp_months: p.ramp_months,
                duration_months: p.duration_months,
            });
        }
        Ok(())
    }

    fn validate_market(&self) -> Result<(), ValidationError> {
        let m = &self.market;
        check_range("market.target_accounts", f64::from(m.target_accounts), 0.0, 2000.0)?;
        check_range("market.in_market_rate_pct", m.in_market_rate_pct, 0.0, 70.0)?;
        check_range(
            "market.qualified_opps_per_account",
            m.qualified_opps_per_account,
            0.0,
            3.0,
        )?;
        check_range("market.baseline_win_rate_pct", m.baseline_win_rate_pct, 0.0, 60.0)?;
        check_non_negative("market.baseline_acv", m.baseline_acv)?;
        check_range(
            "market.contribution_margin_pct",
            m.contribution_margin_pct,
            0.0,
            95.0,
        )?;
        check_range(
            "market.baseline_sales_cycle_months",
            m.baseline_sales_cycle_months,
            0.0,
            24.0,
        )?;
        check_range(
            "market.abm_sales_cycle_months",
            m.abm_sales_cycle_months,
            0.0,
            24.0,
        )?;
        if m.abm_sales_cycle_months > m.baseline_sales_cycle_months {
            return Err(ValidationError::AbmCycleExceedsBaseline {
                abm_months: m.abm_sales_cycle_months,
                baseline_months: m.baseline_sales_cycle_months,
            });
        }
        Ok(())
    }

    fn validate_uplifts(&self) -> Result<(), ValidationError> {
        let u = &self.uplifts;
        check_range("uplifts.win_rate_uplift_pp", u.win_rate_uplift_pp, 0.0, 20.0)?;
        check_range("uplifts.acv_uplift_pct", u.acv_uplift_pct, -30.0, 100.0)?;
        check_range(
            "uplifts.opportunity_uplift_pct",
            u.opportunity_uplift_pct,
            0.0,
            100.0,
        )
    }

    fn validate_costs(&self) -> Result<(), ValidationError> {
        let c = &self.costs;
        check_non_negative("costs.people", c.people)?;
        check_non_negative("costs.media", c.media)?;
        check_non_negative("costs.data_tech", c.data_tech)?;
        check_non_negative("costs.content", c.content)?;
        check_non_negative("costs.agency", c.agency)?;
        check_non_negative("costs.other", c.other)?;
        if let Some(override_total) = c.total_override {
            check_non_negative("costs.total_override", override_total)?;
        }
        if !c.has_investment_signal() {
            return Err(ValidationError::MissingInvestmentSignal);
        }
        Ok(())
    }

    fn validate_capacity(&self) -> Result<(), ValidationError> {
        let cap = &self.capacity;
        check_non_negative("capacity.marketing_fte", cap.marketing_fte)?;
        check_non_negative("capacity.sales_fte", cap.sales_fte)?;
        check_range("capacity.utilisation_pct", cap.utilisation_pct, 0.0, 100.0)?;
        check_non_negative("capacity.hours_per_account", cap.hours_per_account)?;
        check_non_negative("capacity.benchmarks.one_to_one", cap.benchmarks.one_to_one)?;
        check_non_negative("capacity.benchmarks.one_to_few", cap.benchmarks.one_to_few)?;
        check_non_negative("capacity.benchmarks.one_to_many", cap.benchmarks.one_to_many)?;
        check_range("capacity.intensity_exponent", cap.intensity_exponent, 0.0, 1.0)
    }

    fn validate_alignment(&self) -> Result<(), ValidationError> {
        if let Some(alignment) = &self.alignment {
            let m = alignment.multipliers();
            check_non_negative("alignment.opportunity_multiplier", m.opportunity)?;
            check_non_negative("alignment.win_multiplier", m.win)?;
            check_non_negative("alignment.velocity_multiplier", m.velocity)?;
        }
        Ok(())
    }

    /// The capacity source currently selected, for display layers that
    /// toggle between budget and team views.
    #[must_use]
    pub fn capacity_source(&self) -> CapacitySource {
        self.capacity.source
    }
}
