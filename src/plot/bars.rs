//! ASCII bar chart of monthly consumption per stage.
//!
//! Used by `aqua estimate` for a quick visual comparison of where the water
//! goes. The TUI renders the same data with a ratatui `BarChart` widget
//! instead; this renderer stays dependency-free so it also works in piped
//! output.

use crate::domain::PipelineState;

const BAR: &str = "█";

/// Render a horizontal bar chart of monthly liters per stage.
///
/// `width` is the maximum bar width in columns; bars are scaled linearly to
/// the largest stage. Stages with zero consumption render an empty bar.
pub fn render_bar_chart(state: &PipelineState, width: usize) -> String {
    let width = width.max(10);
    let mut out = String::new();

    let max = state
        .records()
        .iter()
        .map(|r| r.result.monthly_liters)
        .fold(0.0_f64, f64::max);

    out.push_str("Monthly consumption by stage:\n");
    for record in state.records() {
        let liters = record.result.monthly_liters;
        let cols = if max > 0.0 {
            ((liters / max) * width as f64).round() as usize
        } else {
            0
        };
        let bar = BAR.repeat(cols);
        out.push_str(&format!(
            "{:<14} {:<width$} {:>10.2} L\n",
            record.fixture.display_name(),
            bar,
            liters,
            width = width,
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Fixture, StageRecord, StageResult};

    fn state_with(monthly: &[(Fixture, f64)]) -> PipelineState {
        let mut state = PipelineState::new();
        for &(fixture, monthly_liters) in monthly {
            state.merge(StageRecord {
                fixture,
                inputs: vec![],
                result: StageResult {
                    monthly_liters,
                    ..Default::default()
                },
            });
        }
        state
    }

    #[test]
    fn largest_stage_fills_the_width() {
        let state = state_with(&[(Fixture::Kitchen, 200.0), (Fixture::Shower, 100.0)]);
        let out = render_bar_chart(&state, 20);

        let kitchen_line = out.lines().find(|l| l.starts_with("Kitchen")).unwrap();
        let shower_line = out.lines().find(|l| l.starts_with("Shower")).unwrap();
        assert_eq!(kitchen_line.matches(BAR).count(), 20);
        assert_eq!(shower_line.matches(BAR).count(), 10);
    }

    #[test]
    fn all_zero_consumption_renders_empty_bars() {
        let state = state_with(&[(Fixture::Kitchen, 0.0)]);
        let out = render_bar_chart(&state, 20);
        assert_eq!(out.matches(BAR).count(), 0);
    }
}
