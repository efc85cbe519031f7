//! Integration tests for the abmplan calculation engine
//!
//! Tests are organized by topic:
//! - `builder_dsl` - Scenario builder and validation boundary
//! - `partition` - Treated/untreated blend invariants
//! - `reference_scenario` - Worked example scenario end to end
//! - `serialization` - JSON boundary contract with the display layer

mod builder_dsl;
mod partition;
