//! Capacity, tier, and alignment settings.
//!
//! These bound how many accounts the programme can actively treat. The
//! resolver supports two capacity sources — a budget cap against per-tier
//! benchmark costs, or a team-time cap against marketing/sales hours — and
//! an optional sales/marketing alignment setting that scales the realized
//! uplifts. Benchmark figures, FTE hours, and the intensity exponent are
//! calibration defaults, overridable per scenario.

use serde::{Deserialize, Serialize};

/// Assumed productive marketing hours per FTE per month.
pub const MONTHLY_MARKETING_HOURS_PER_FTE: f64 = 120.0;

/// Assumed productive sales hours per FTE per month. Lower than marketing:
/// sellers split time across non-programme pipeline.
pub const MONTHLY_SALES_HOURS_PER_FTE: f64 = 100.0;

/// Default exponent for the coverage → intensity diminishing-returns curve.
pub const DEFAULT_INTENSITY_EXPONENT: f64 = 0.8;

/// Which resource bounds the number of treatable accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CapacitySource {
    /// Programme budget divided by the tier benchmark cost per account.
    #[default]
    Budget,
    /// Marketing/sales team hours divided by hours per treated account.
    Team,
}

/// ABM motion tier, from fully bespoke to lightly personalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProgrammeTier {
    /// Bespoke plays for a handful of named accounts.
    OneToOne,
    /// Cluster plays for small groups of similar accounts.
    #[default]
    OneToFew,
    /// Programmatic plays across a broad segment.
    OneToMany,
}

/// Benchmark cost to fully treat one account for one programme, per tier.
///
/// Calibration defaults, not invariants — scenarios may override them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierBenchmarks {
    pub one_to_one: f64,
    pub one_to_few: f64,
    pub one_to_many: f64,
}

impl Default for TierBenchmarks {
    fn default() -> Self {
        Self {
            one_to_one: 60_000.0,
            one_to_few: 23_500.0,
            one_to_many: 6_000.0,
        }
    }
}

impl TierBenchmarks {
    /// Benchmark cost per account for the given tier.
    #[must_use]
    pub fn cost_per_account(&self, tier: ProgrammeTier) -> f64 {
        match tier {
            ProgrammeTier::OneToOne => self.one_to_one,
            ProgrammeTier::OneToFew => self.one_to_few,
            ProgrammeTier::OneToMany => self.one_to_many,
        }
    }
}

fn default_intensity_exponent() -> f64 {
    DEFAULT_INTENSITY_EXPONENT
}

/// Capacity assumptions bounding the treated-account count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityInputs {
    /// Which resource caps treatment.
    pub source: CapacitySource,
    /// Motion tier, selecting the budget benchmark.
    pub tier: ProgrammeTier,
    /// Marketing headcount dedicated to the programme.
    pub marketing_fte: f64,
    /// Sales headcount dedicated to the programme.
    pub sales_fte: f64,
    /// Share of each FTE's hours actually available, in percent (0–100).
    pub utilisation_pct: f64,
    /// Team hours required to treat one account.
    pub hours_per_account: f64,
    /// Per-tier benchmark costs for the budget path.
    #[serde(default)]
    pub benchmarks: TierBenchmarks,
    /// Coverage → intensity exponent; lower values flatten the
    /// diminishing-returns curve.
    #[serde(default = "default_intensity_exponent")]
    pub intensity_exponent: f64,
}

impl Default for CapacityInputs {
    fn default() -> Self {
        Self {
            source: CapacitySource::Budget,
            tier: ProgrammeTier::OneToFew,
            marketing_fte: 2.0,
            sales_fte: 3.0,
            utilisation_pct: 70.0,
            hours_per_account: 12.0,
            benchmarks: TierBenchmarks::default(),
            intensity_exponent: DEFAULT_INTENSITY_EXPONENT,
        }
    }
}

/// Qualitative sales/marketing alignment rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentLevel {
    Poor,
    #[default]
    Standard,
    Excellent,
}

/// Multipliers applied to realized uplifts for a given alignment level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentMultipliers {
    /// Scales the realized opportunity uplift.
    pub opportunity: f64,
    /// Scales the realized win-rate uplift.
    pub win: f64,
    /// Scales the velocity factor in the payback calculation.
    pub velocity: f64,
}

impl AlignmentMultipliers {
    /// No alignment effect; the behavior of the simpler coverage generation.
    pub const NEUTRAL: Self = Self {
        opportunity: 1.0,
        win: 1.0,
        velocity: 1.0,
    };
}

impl Default for AlignmentMultipliers {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl AlignmentLevel {
    /// Default multiplier table for each level.
    #[must_use]
    pub fn multipliers(self) -> AlignmentMultipliers {
        match self {
            AlignmentLevel::Poor => AlignmentMultipliers {
                opportunity: 0.8,
                win: 0.8,
                velocity: 0.9,
            },
            AlignmentLevel::Standard => AlignmentMultipliers::NEUTRAL,
            AlignmentLevel::Excellent => AlignmentMultipliers {
                opportunity: 1.15,
                win: 1.15,
                velocity: 1.1,
            },
        }
    }
}

/// Optional alignment refinement on top of intensity scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AlignmentInputs {
    pub level: AlignmentLevel,
    /// Replaces the level's default multipliers when set.
    #[serde(default)]
    pub custom_multipliers: Option<AlignmentMultipliers>,
}

impl AlignmentInputs {
    /// Effective multipliers: the custom table when present, else the
    /// level defaults.
    #[must_use]
    pub fn multipliers(&self) -> AlignmentMultipliers {
        self.custom_multipliers
            .unwrap_or_else(|| self.level.multipliers())
    }
}
