//! Scenario evaluation pipeline.
//!
//! Runs the fixed calculation DAG — coverage → baseline → ABM → incremental
//! — and bundles the stage outputs into a [`ScenarioResult`]. The order is a
//! data dependency, not a concurrency concern: each stage consumes the
//! previous stage's output, and the whole pipeline is a synchronous pure
//! function of the config.

use crate::config::ScenarioConfig;
use crate::coverage::resolve_coverage;
use crate::funnel::{calculate_abm, calculate_baseline};
use crate::incremental::calculate_incremental;
use crate::model::ScenarioResult;

/// Evaluate one scenario end to end.
///
/// Assumes a validated config (see [`crate::config::ScenarioBuilder`]);
/// numeric guards inside each stage keep malformed values from producing
/// `NaN` or negative magnitudes, but they are not a substitute for
/// validation.
#[must_use]
pub fn evaluate_scenario(config: &ScenarioConfig) -> ScenarioResult {
    let coverage = resolve_coverage(&config.market, &config.costs, &config.capacity);
    let baseline = calculate_baseline(&config.market);
    let abm = calculate_abm(
        &config.market,
        &baseline,
        &config.uplifts,
        &coverage,
        config.alignment.as_ref(),
    );
    let incremental = calculate_incremental(
        &config.programme,
        &config.market,
        &baseline,
        &abm,
        &config.costs,
        config.alignment.as_ref(),
    );

    ScenarioResult {
        inputs: config.clone(),
        coverage,
        baseline,
        abm,
        incremental,
        guardrails: Vec::new(),
    }
}
