//! Two-dimensional sensitivity analysis.
//!
//! Recomputes the full scenario pipeline across the cross product of an
//! in-market-rate range and a win-uplift range, recording the ROI for each
//! cell. Rows follow the in-market axis, columns the win-uplift axis.
//!
//! ```ignore
//! use abmplan_core::analysis::build_sensitivity_grid;
//!
//! let grid = build_sensitivity_grid(&config);
//! for row in grid.rows() {
//!     for cell in row {
//!         match cell.roi {
//!             Some(roi) => print!("{roi:+.2} "),
//!             None => print!("  —  "),
//!         }
//!     }
//!     println!();
//! }
//! ```
//!
//! Cells are independent and side-effect free; under the `parallel` feature
//! they are computed with rayon, and the result is identical to the
//! sequential fallback.

mod config;
mod evaluator;

pub use config::{SensitivityCell, SensitivityConfig, SensitivityGrid};
pub use evaluator::build_sensitivity_grid;
