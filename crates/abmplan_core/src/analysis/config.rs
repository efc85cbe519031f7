//! Sensitivity configuration and grid storage.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Axis ranges for the sensitivity sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityConfig {
    /// In-market rates to sweep (row axis), in percent.
    pub in_market_rates_pct: Vec<f64>,
    /// Win-rate uplifts to sweep (column axis), in percentage points.
    pub win_uplifts_pp: Vec<f64>,
    /// Interpolation resolution hint for the display layer (3–11). Never
    /// consumed by the grid math.
    #[serde(default)]
    pub resolution_hint: Option<u8>,
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            in_market_rates_pct: vec![15.0, 25.0, 35.0, 45.0, 55.0],
            win_uplifts_pp: vec![0.0, 4.0, 8.0, 12.0, 16.0],
            resolution_hint: None,
        }
    }
}

impl SensitivityConfig {
    /// Both axes non-empty, hint (when set) within 3–11.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.in_market_rates_pct.is_empty() {
            return Err(ValidationError::EmptySensitivityRange {
                axis: "in_market_rates_pct",
            });
        }
        if self.win_uplifts_pp.is_empty() {
            return Err(ValidationError::EmptySensitivityRange {
                axis: "win_uplifts_pp",
            });
        }
        if let Some(hint) = self.resolution_hint
            && !(3..=11).contains(&hint)
        {
            return Err(ValidationError::FieldOutOfRange {
                field: "sensitivity.resolution_hint",
                value: f64::from(hint),
                min: 3.0,
                max: 11.0,
            });
        }
        Ok(())
    }

    /// Grid dimensions as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.in_market_rates_pct.len(), self.win_uplifts_pp.len())
    }
}

/// One grid cell: the two overridden inputs and the resulting ROI.
///
/// `roi` is `None` when the scenario at this cell has no computable ROI
/// (e.g. zero programme cost) — the display layer renders those cells as
/// empty, not as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityCell {
    pub in_market_rate_pct: f64,
    pub win_rate_uplift_pp: f64,
    pub roi: Option<f64>,
}

/// Row-major 2-D grid of sensitivity cells.
///
/// Row index follows the in-market-rate range, column index the win-uplift
/// range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityGrid {
    cells: Vec<SensitivityCell>,
    rows: usize,
    cols: usize,
}

impl SensitivityGrid {
    /// Build a grid from row-major cell storage. Returns `None` when the
    /// cell count does not match the shape.
    #[must_use]
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<SensitivityCell>) -> Option<Self> {
        if cells.len() != rows * cols {
            return None;
        }
        Some(Self { cells, rows, cols })
    }

    /// Grid dimensions as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total cell count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at (row, col); `None` out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&SensitivityCell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    /// Iterate rows as slices, in in-market-rate order.
    pub fn rows(&self) -> impl Iterator<Item = &[SensitivityCell]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// Flat row-major cell access.
    #[must_use]
    pub fn cells(&self) -> &[SensitivityCell] {
        &self.cells
    }

    /// Smallest and largest computable ROI in the grid, for display
    /// scaling. `None` when no cell has a computable ROI.
    #[must_use]
    pub fn roi_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for roi in self.cells.iter().filter_map(|c| c.roi) {
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(roi), max.max(roi)),
                None => (roi, roi),
            });
        }
        bounds
    }
}
