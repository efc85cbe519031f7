//! Programme cost categories.

use serde::{Deserialize, Serialize};

use crate::numeric::floor_zero;

/// The six programme cost categories, plus an optional single-field total
/// override for users who only know their overall budget.
///
/// Validation requires a non-zero investment signal: either the override is
/// positive or at least one category is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ProgrammeCosts {
    pub people: f64,
    pub media: f64,
    pub data_tech: f64,
    pub content: f64,
    pub agency: f64,
    pub other: f64,
    /// Overrides the category sum, but only while every category is zero.
    #[serde(default)]
    pub total_override: Option<f64>,
}

impl ProgrammeCosts {
    /// Sum of the six categories, before the override rule.
    #[must_use]
    pub fn category_sum(&self) -> f64 {
        floor_zero(
            self.people + self.media + self.data_tech + self.content + self.agency + self.other,
        )
    }

    /// Total programme cost.
    ///
    /// The category sum wins when positive; the override applies only when
    /// every category is zero. Always non-negative.
    #[must_use]
    pub fn total(&self) -> f64 {
        let sum = self.category_sum();
        if sum > 0.0 {
            sum
        } else {
            floor_zero(self.total_override.unwrap_or(0.0))
        }
    }

    /// Whether the scenario carries any investment signal at all.
    #[must_use]
    pub fn has_investment_signal(&self) -> bool {
        self.total() > 0.0
    }
}
