//! Formatted terminal output for estimate runs and reloaded reports.

use crate::domain::{PipelineState, ReportFile, Totals};

/// Format the full run summary: per-stage table plus combined totals.
pub fn format_run_summary(state: &PipelineState, totals: &Totals) -> String {
    let mut out = String::new();

    out.push_str("=== aqua - household water budget ===\n\n");
    out.push_str(&format_stage_table(state));
    out.push('\n');
    out.push_str(&format_totals(totals));

    out
}

/// Format the summary of a previously exported report file.
pub fn format_report_file(report: &ReportFile) -> String {
    let mut out = String::new();

    out.push_str("=== aqua - saved report ===\n");
    out.push_str(&format!("Generated: {}\n", report.generated_on));
    if let Some(user) = &report.user {
        out.push_str(&format!("User: {user}\n"));
    }
    out.push('\n');

    let mut state = PipelineState::new();
    for record in &report.stages {
        state.merge(record.clone());
    }
    out.push_str(&format_stage_table(&state));
    out.push('\n');
    out.push_str(&format_totals(&report.totals));

    out
}

/// Per-stage table: inputs, liters per period, and estimated cost.
pub fn format_stage_table(state: &PipelineState) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<14} {:<12} {:>10} {:>11} {:>12} {:>10}\n",
        "stage", "inputs", "L/day", "L/week", "L/month", "cost"
    ));
    out.push_str(&format!(
        "{:-<14} {:-<12} {:-<10} {:-<11} {:-<12} {:-<10}\n",
        "", "", "", "", "", ""
    ));

    for record in state.records() {
        let r = &record.result;
        out.push_str(&format!(
            "{:<14} {:<12} {:>10.2} {:>11.2} {:>12.2} {:>10}\n",
            record.fixture.display_name(),
            record.inputs.join(", "),
            r.daily_liters,
            r.weekly_liters,
            r.monthly_liters,
            fmt_brl(r.cost),
        ));
    }

    out
}

fn format_totals(totals: &Totals) -> String {
    let mut out = String::new();
    out.push_str("Totals:\n");
    out.push_str(&format!(
        "- consumption: {:.2} L/day | {:.2} L/week | {:.2} L/month\n",
        totals.daily_liters, totals.weekly_liters, totals.monthly_liters
    ));
    out.push_str(&format!(
        "- estimated monthly cost: {}\n",
        fmt_brl(totals.cost)
    ));
    out
}

/// Format a cost in R$ with two decimals.
pub fn fmt_brl(v: f64) -> String {
    format!("R$ {v:.2}")
}

/// Format a liter amount with its period label, card-style.
pub fn fmt_liters(v: f64, period: &str) -> String {
    format!("{v:.2} L / {period}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Fixture, StageRecord};
    use crate::report::compute_totals;
    use crate::stages;

    fn demo_state() -> PipelineState {
        let mut state = PipelineState::new();
        for (fixture, fields) in [
            (Fixture::Kitchen, vec!["3", "5"]),
            (Fixture::ToiletFlush, vec!["5"]),
        ] {
            let inputs: Vec<String> = fields.iter().map(|s| s.to_string()).collect();
            let result = stages::recompute(fixture, &inputs, Default::default());
            state.merge(StageRecord {
                fixture,
                inputs,
                result,
            });
        }
        state
    }

    #[test]
    fn fmt_brl_rounds_to_cents() {
        assert_eq!(fmt_brl(5.1072), "R$ 5.11");
        assert_eq!(fmt_brl(0.0), "R$ 0.00");
        assert_eq!(fmt_brl(60.75), "R$ 60.75");
    }

    #[test]
    fn fmt_liters_card_style() {
        assert_eq!(fmt_liters(212.8, "week"), "212.80 L / week");
    }

    #[test]
    fn summary_contains_stages_and_totals() {
        let state = demo_state();
        let totals = compute_totals(&state);
        let out = format_run_summary(&state, &totals);

        assert!(out.contains("Kitchen"));
        assert!(out.contains("Toilet flush"));
        assert!(out.contains("851.20"));
        assert!(out.contains("R$ 9.83")); // 5.1072 + 4.725
    }
}
