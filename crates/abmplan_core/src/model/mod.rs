mod capacity;
mod costs;
mod market;
mod programme;
mod results;

pub use capacity::{
    AlignmentInputs, AlignmentLevel, AlignmentMultipliers, CapacityInputs, CapacitySource,
    DEFAULT_INTENSITY_EXPONENT, MONTHLY_MARKETING_HOURS_PER_FTE, MONTHLY_SALES_HOURS_PER_FTE,
    ProgrammeTier, TierBenchmarks,
};
pub use costs::ProgrammeCosts;
pub use market::{MarketFunnelInputs, UpliftInputs};
pub use programme::ProgrammeSettings;
pub use results::{
    AbmOutputs, BaselineOutputs, BindingConstraint, CoverageOutputs, Guardrail, GuardrailKind,
    IncrementalOutputs, ScenarioResult, TeamBottleneck,
};
