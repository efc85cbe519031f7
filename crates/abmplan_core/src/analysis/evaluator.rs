//! Sensitivity grid evaluator.
//!
//! Each cell clones the scenario config, overrides only the in-market rate
//! and win-rate uplift, and runs the complete pipeline. Cells share nothing,
//! so they can be computed in any order; with the `parallel` feature they
//! are evaluated with rayon, producing bit-identical results to the
//! sequential fallback.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::{SensitivityCell, SensitivityGrid};
use crate::config::ScenarioConfig;
use crate::scenario::evaluate_scenario;

/// Evaluate one grid cell.
fn evaluate_cell(
    base_config: &ScenarioConfig,
    in_market_rate_pct: f64,
    win_rate_uplift_pp: f64,
) -> SensitivityCell {
    let mut config = base_config.clone();
    config.market.in_market_rate_pct = in_market_rate_pct;
    config.uplifts.win_rate_uplift_pp = win_rate_uplift_pp;

    let result = evaluate_scenario(&config);
    SensitivityCell {
        in_market_rate_pct,
        win_rate_uplift_pp,
        roi: result.incremental.roi,
    }
}

/// Build the 2-D sensitivity grid for a scenario.
///
/// Dimensions follow `config.sensitivity`: one row per in-market rate, one
/// column per win-rate uplift. The base config's own rate and uplift are
/// ignored inside the grid — only the swept values apply per cell.
#[must_use]
pub fn build_sensitivity_grid(config: &ScenarioConfig) -> SensitivityGrid {
    let rates = &config.sensitivity.in_market_rates_pct;
    let uplifts = &config.sensitivity.win_uplifts_pp;

    let coordinates: Vec<(f64, f64)> = rates
        .iter()
        .flat_map(|&rate| uplifts.iter().map(move |&uplift| (rate, uplift)))
        .collect();

    #[cfg(feature = "parallel")]
    let cells: Vec<SensitivityCell> = coordinates
        .par_iter()
        .map(|&(rate, uplift)| evaluate_cell(config, rate, uplift))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let cells: Vec<SensitivityCell> = coordinates
        .iter()
        .map(|&(rate, uplift)| evaluate_cell(config, rate, uplift))
        .collect();

    SensitivityGrid::from_cells(rates.len(), uplifts.len(), cells)
        .expect("cell count matches axis cross product")
}
