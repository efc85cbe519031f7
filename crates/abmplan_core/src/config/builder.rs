//! Scenario builder.
//!
//! Fluent construction for [`ScenarioConfig`] with validation at `build()`.
//! Defaults come from each section's `Default` impl, so a builder only needs
//! the fields a scenario actually changes. `build()` is the single place a
//! validated config is minted — calculation code downstream of it never
//! re-checks ranges.

use super::ScenarioConfig;
use crate::analysis::SensitivityConfig;
use crate::error::ValidationError;
use crate::inmarket::{capped_share, derive_in_market_share};
use crate::numeric::to_decimal;
use crate::model::{
    AlignmentInputs, AlignmentLevel, CapacityInputs, CapacitySource, MarketFunnelInputs,
    ProgrammeCosts, ProgrammeSettings, ProgrammeTier, TierBenchmarks, UpliftInputs,
};

/// Fluent builder for a validated [`ScenarioConfig`].
#[derive(Debug, Clone, Default)]
pub struct ScenarioBuilder {
    config: ScenarioConfig,
}

impl ScenarioBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing config, e.g. to derive a variant scenario.
    #[must_use]
    pub fn from_config(config: ScenarioConfig) -> Self {
        Self { config }
    }

    // =========================================================================
    // Programme
    // =========================================================================

    #[must_use]
    pub fn duration_months(mut self, months: u32) -> Self {
        self.config.programme.duration_months = months;
        self
    }

    #[must_use]
    pub fn ramp_months(mut self, months: u32) -> Self {
        self.config.programme.ramp_months = months;
        self
    }

    #[must_use]
    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.config.programme.currency = code.into();
        self
    }

    #[must_use]
    pub fn locale(mut self, tag: impl Into<String>) -> Self {
        self.config.programme.locale = tag.into();
        self
    }

    /// Replace the whole programme section.
    #[must_use]
    pub fn programme(mut self, programme: ProgrammeSettings) -> Self {
        self.config.programme = programme;
        self
    }

    // =========================================================================
    // Market funnel
    // =========================================================================

    #[must_use]
    pub fn target_accounts(mut self, accounts: u32) -> Self {
        self.config.market.target_accounts = accounts;
        self
    }

    #[must_use]
    pub fn in_market_rate(mut self, pct: f64) -> Self {
        self.config.market.in_market_rate_pct = pct;
        self
    }

    /// Auto-derive the in-market rate from the programme window and a
    /// point-in-time rate instead of setting it directly.
    ///
    /// Uses the hazard-rate deriver over the already-configured duration and
    /// ramp (set those first), then applies the auto-derivation display
    /// ceiling. `point_in_time_share_pct` is a percentage, e.g. `5.0`.
    #[must_use]
    pub fn derive_in_market_rate(
        mut self,
        buying_window_months: f64,
        point_in_time_share_pct: f64,
    ) -> Self {
        let share = derive_in_market_share(
            f64::from(self.config.programme.duration_months),
            f64::from(self.config.programme.ramp_months),
            buying_window_months,
            to_decimal(point_in_time_share_pct),
        );
        self.config.market.in_market_rate_pct = capped_share(share) * 100.0;
        self
    }

    #[must_use]
    pub fn qualified_opps_per_account(mut self, opps: f64) -> Self {
        self.config.market.qualified_opps_per_account = opps;
        self
    }

    #[must_use]
    pub fn baseline_win_rate(mut self, pct: f64) -> Self {
        self.config.market.baseline_win_rate_pct = pct;
        self
    }

    #[must_use]
    pub fn baseline_acv(mut self, acv: f64) -> Self {
        self.config.market.baseline_acv = acv;
        self
    }

    #[must_use]
    pub fn contribution_margin(mut self, pct: f64) -> Self {
        self.config.market.contribution_margin_pct = pct;
        self
    }

    /// Set baseline and ABM sales-cycle lengths together.
    #[must_use]
    pub fn sales_cycles(mut self, baseline_months: f64, abm_months: f64) -> Self {
        self.config.market.baseline_sales_cycle_months = baseline_months;
        self.config.market.abm_sales_cycle_months = abm_months;
        self
    }

    /// Replace the whole market section.
    #[must_use]
    pub fn market(mut self, market: MarketFunnelInputs) -> Self {
        self.config.market = market;
        self
    }

    // =========================================================================
    // Uplifts
    // =========================================================================

    #[must_use]
    pub fn win_rate_uplift(mut self, pp: f64) -> Self {
        self.config.uplifts.win_rate_uplift_pp = pp;
        self
    }

    #[must_use]
    pub fn acv_uplift(mut self, pct: f64) -> Self {
        self.config.uplifts.acv_uplift_pct = pct;
        self
    }

    #[must_use]
    pub fn opportunity_uplift(mut self, pct: f64) -> Self {
        self.config.uplifts.opportunity_uplift_pct = pct;
        self
    }

    /// Replace the whole uplift section.
    #[must_use]
    pub fn uplifts(mut self, uplifts: UpliftInputs) -> Self {
        self.config.uplifts = uplifts;
        self
    }

    // =========================================================================
    // Costs
    // =========================================================================

    #[must_use]
    pub fn cost_people(mut self, amount: f64) -> Self {
        self.config.costs.people = amount;
        self
    }

    #[must_use]
    pub fn cost_media(mut self, amount: f64) -> Self {
        self.config.costs.media = amount;
        self
    }

    #[must_use]
    pub fn cost_data_tech(mut self, amount: f64) -> Self {
        self.config.costs.data_tech = amount;
        self
    }

    #[must_use]
    pub fn cost_content(mut self, amount: f64) -> Self {
        self.config.costs.content = amount;
        self
    }

    #[must_use]
    pub fn cost_agency(mut self, amount: f64) -> Self {
        self.config.costs.agency = amount;
        self
    }

    #[must_use]
    pub fn cost_other(mut self, amount: f64) -> Self {
        self.config.costs.other = amount;
        self
    }

    /// Set the single-field total override (applies only while every
    /// category is zero).
    #[must_use]
    pub fn total_cost_override(mut self, amount: f64) -> Self {
        self.config.costs.total_override = Some(amount);
        self
    }

    /// Replace the whole costs section.
    #[must_use]
    pub fn costs(mut self, costs: ProgrammeCosts) -> Self {
        self.config.costs = costs;
        self
    }

    // =========================================================================
    // Capacity and alignment
    // =========================================================================

    #[must_use]
    pub fn capacity_source(mut self, source: CapacitySource) -> Self {
        self.config.capacity.source = source;
        self
    }

    #[must_use]
    pub fn tier(mut self, tier: ProgrammeTier) -> Self {
        self.config.capacity.tier = tier;
        self
    }

    #[must_use]
    pub fn team(mut self, marketing_fte: f64, sales_fte: f64, utilisation_pct: f64) -> Self {
        self.config.capacity.marketing_fte = marketing_fte;
        self.config.capacity.sales_fte = sales_fte;
        self.config.capacity.utilisation_pct = utilisation_pct;
        self
    }

    #[must_use]
    pub fn hours_per_account(mut self, hours: f64) -> Self {
        self.config.capacity.hours_per_account = hours;
        self
    }

    #[must_use]
    pub fn tier_benchmarks(mut self, benchmarks: TierBenchmarks) -> Self {
        self.config.capacity.benchmarks = benchmarks;
        self
    }

    #[must_use]
    pub fn intensity_exponent(mut self, exponent: f64) -> Self {
        self.config.capacity.intensity_exponent = exponent;
        self
    }

    /// Replace the whole capacity section.
    #[must_use]
    pub fn capacity(mut self, capacity: CapacityInputs) -> Self {
        self.config.capacity = capacity;
        self
    }

    #[must_use]
    pub fn alignment(mut self, level: AlignmentLevel) -> Self {
        self.config.alignment = Some(AlignmentInputs {
            level,
            custom_multipliers: None,
        });
        self
    }

    #[must_use]
    pub fn alignment_inputs(mut self, alignment: AlignmentInputs) -> Self {
        self.config.alignment = Some(alignment);
        self
    }

    // =========================================================================
    // Sensitivity
    // =========================================================================

    #[must_use]
    pub fn sensitivity_ranges(mut self, in_market_rates: Vec<f64>, win_uplifts: Vec<f64>) -> Self {
        self.config.sensitivity.in_market_rates_pct = in_market_rates;
        self.config.sensitivity.win_uplifts_pp = win_uplifts;
        self
    }

    #[must_use]
    pub fn sensitivity_resolution_hint(mut self, hint: u8) -> Self {
        self.config.sensitivity.resolution_hint = Some(hint);
        self
    }

    /// Replace the whole sensitivity section.
    #[must_use]
    pub fn sensitivity(mut self, sensitivity: SensitivityConfig) -> Self {
        self.config.sensitivity = sensitivity;
        self
    }

    // =========================================================================
    // Build
    // =========================================================================

    /// Validate and return the config.
    pub fn build(self) -> Result<ScenarioConfig, ValidationError> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Return the config without validating. For tests that deliberately
    /// construct out-of-range inputs to exercise the numeric guards.
    #[must_use]
    pub fn build_unchecked(self) -> ScenarioConfig {
        self.config
    }
}
