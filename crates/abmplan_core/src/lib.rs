//! ABM programme planning engine
//!
//! This crate provides the calculation engine for planning-stage
//! account-based-marketing economics. It supports:
//! - Baseline (no-ABM) funnel projection from market assumptions
//! - Coverage/capacity resolution from budget or team-time constraints
//! - ABM projection blending an uplifted treated subset with an untreated
//!   remainder at baseline rates
//! - Incremental financials: ROI, gross ROMI, break-even wins, payback
//! - 2-D sensitivity grids over in-market rate and win-rate uplift
//! - Hazard-rate derivation of in-market share from a point-in-time rate
//!
//! The engine is a deterministic, side-effect-free function of its inputs:
//! no I/O, no shared state, no caching. Presentation concerns (currency
//! formatting, form handling, tours) live in consumer crates.
//!
//! # Builder DSL
//!
//! Use the fluent builder API for validated scenario setup:
//!
//! ```ignore
//! use abmplan_core::config::ScenarioBuilder;
//! use abmplan_core::scenario::evaluate_scenario;
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
//!     .cost_media(470_000.0)
//!     .build()?;
//!
//! let result = evaluate_scenario(&config);
//! println!("ROI: {:?}", result.incremental.roi);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod coverage;
pub mod error;
pub mod funnel;
pub mod incremental;
pub mod inmarket;
pub mod numeric;
pub mod scenario;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{SensitivityGrid, build_sensitivity_grid};
pub use config::{ScenarioBuilder, ScenarioConfig};
pub use model::ScenarioResult;
pub use scenario::evaluate_scenario;
