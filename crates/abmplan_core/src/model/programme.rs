//! Programme-level settings.

use serde::{Deserialize, Serialize};

fn default_currency() -> String {
    "USD".to_string()
}

fn default_locale() -> String {
    "en-US".to_string()
}

/// Top-level programme assumptions.
///
/// Set once per scenario and immutable during a calculation. `currency` and
/// `locale` are carried opaquely for the display layer — the engine performs
/// no currency conversion or locale-aware formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgrammeSettings {
    /// Programme length in months (0–24).
    pub duration_months: u32,
    /// Ramp-up months before the programme influences accounts
    /// (0–24, never exceeds `duration_months`).
    pub ramp_months: u32,
    /// ISO 4217 currency code for display formatting.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// BCP 47 locale tag for display formatting.
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for ProgrammeSettings {
    fn default() -> Self {
        Self {
            duration_months: 12,
            ramp_months: 3,
            currency: default_currency(),
            locale: default_locale(),
        }
    }
}

impl ProgrammeSettings {
    /// Months during which the programme can influence accounts.
    #[must_use]
    pub fn influence_window_months(&self) -> u32 {
        self.duration_months.saturating_sub(self.ramp_months)
    }
}
