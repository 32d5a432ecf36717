//! Shared estimation pipeline used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! raw inputs -> validation guard -> stage calculators -> accumulator -> totals
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use crate::domain::{EstimateConfig, Fixture, PipelineState, StageRecord, StageResult, Totals};
use crate::stages;

/// All computed outputs of a single estimate run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub state: PipelineState,
    pub totals: Totals,
}

/// Execute the full pipeline over every stage and return the accumulated state.
///
/// Stages are visited in [`Fixture::ALL`] order. Each stage goes through the
/// same raw-text path the interactive forms use, so the validation guard is
/// exercised identically in both hosts.
pub fn run_estimate(config: &EstimateConfig) -> RunOutput {
    let mut state = PipelineState::new();

    for fixture in Fixture::ALL {
        let inputs = raw_inputs(fixture, config);
        let result = stages::recompute(fixture, &inputs, StageResult::default());
        state.merge(StageRecord {
            fixture,
            inputs,
            result,
        });
    }

    let totals = crate::report::compute_totals(&state);
    RunOutput { state, totals }
}

/// The configured counts for one stage, rendered as raw text fields.
fn raw_inputs(fixture: Fixture, config: &EstimateConfig) -> Vec<String> {
    let counts: Vec<u32> = match fixture {
        Fixture::Kitchen => vec![config.washes_per_day, config.faucet_minutes_per_use],
        Fixture::ToiletFlush => vec![config.flushes_per_day],
        Fixture::Shower => vec![config.showers_per_day, config.minutes_per_shower],
        Fixture::BathroomSink => vec![config.sink_uses_per_day],
    };
    counts.iter().map(u32::to_string).collect()
}
