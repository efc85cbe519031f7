use std::fmt;

/// Errors raised by the validation boundary.
///
/// The calculation pipeline itself never returns these — it assumes a
/// validated [`crate::config::ScenarioConfig`] and relies on numeric guards
/// only. Validation failures belong to the boundary between user input and
/// the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A numeric field fell outside its allowed range.
    FieldOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// Ramp months exceed programme duration.
    RampExceedsDuration { ramp_months: u32, duration_months: u32 },
    /// ABM sales cycle exceeds the baseline sales cycle.
    AbmCycleExceedsBaseline {
        abm_months: f64,
        baseline_months: f64,
    },
    /// A field that must be non-negative was given a negative value.
    NegativeField { field: &'static str, value: f64 },
    /// Neither a positive cost category nor a positive override was given.
    MissingInvestmentSignal,
    /// A sensitivity axis has no values to sweep.
    EmptySensitivityRange { axis: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldOutOfRange {
                field,
                value,
                min,
                max,
            } => {
                write!(f, "{field} = {value} is outside the allowed range [{min}, {max}]")
            }
            ValidationError::RampExceedsDuration {
                ramp_months,
                duration_months,
            } => {
                write!(
                    f,
                    "ramp of {ramp_months} months exceeds programme duration of {duration_months} months"
                )
            }
            ValidationError::AbmCycleExceedsBaseline {
                abm_months,
                baseline_months,
            } => {
                write!(
                    f,
                    "ABM sales cycle of {abm_months} months exceeds baseline cycle of {baseline_months} months"
                )
            }
            ValidationError::NegativeField { field, value } => {
                write!(f, "{field} = {value} must not be negative")
            }
            ValidationError::MissingInvestmentSignal => {
                write!(
                    f,
                    "scenario has no investment signal: set a cost category or a total override"
                )
            }
            ValidationError::EmptySensitivityRange { axis } => {
                write!(f, "sensitivity range for {axis} is empty")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
