//! Reporting: combined totals and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the stage/pipeline code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;

pub use format::*;

use crate::domain::{PipelineState, Totals};

/// Sum liters and cost across all stages in the state.
///
/// This is pure aggregation: stage costs were already computed under their
/// own tariffs (flat vs tiered), so they are simply added.
pub fn compute_totals(state: &PipelineState) -> Totals {
    let mut totals = Totals::default();
    for record in state.records() {
        totals.daily_liters += record.result.daily_liters;
        totals.weekly_liters += record.result.weekly_liters;
        totals.monthly_liters += record.result.monthly_liters;
        totals.cost += record.result.cost;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Fixture, StageRecord};
    use crate::stages;

    fn record(fixture: Fixture, fields: &[&str]) -> StageRecord {
        let inputs: Vec<String> = fields.iter().map(|s| s.to_string()).collect();
        let result = stages::recompute(fixture, &inputs, Default::default());
        StageRecord {
            fixture,
            inputs,
            result,
        }
    }

    #[test]
    fn totals_sum_across_stages() {
        let mut state = PipelineState::new();
        state.merge(record(Fixture::Kitchen, &["3", "5"]));
        state.merge(record(Fixture::ToiletFlush, &["5"]));

        let totals = compute_totals(&state);
        assert!((totals.monthly_liters - (851.2 + 1350.0)).abs() < 1e-9);
        assert!((totals.cost - (5.1072 + 4.725)).abs() < 1e-9);
        assert!((totals.daily_liters - (30.4 + 45.0)).abs() < 1e-9);
    }

    #[test]
    fn totals_of_empty_state_are_zero() {
        assert_eq!(compute_totals(&PipelineState::new()), Totals::default());
    }
}
