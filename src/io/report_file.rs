//! Read/write report JSON files.
//!
//! Report JSON is the "portable" representation of a finished run:
//! - per-stage raw inputs and computed results
//! - combined totals
//! - run metadata (generated-on date, signed-in user)
//!
//! The schema is defined by `domain::ReportFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{PipelineState, ReportFile, Totals};
use crate::error::AppError;

/// Assemble a report from a finished pipeline state.
pub fn build_report(state: &PipelineState, totals: Totals, user: Option<String>) -> ReportFile {
    ReportFile {
        tool: "aqua".to_string(),
        generated_on: chrono::Local::now().date_naive(),
        user,
        stages: state.records().to_vec(),
        totals,
    }
}

/// Write a report JSON file.
pub fn write_report_json(path: &Path, report: &ReportFile) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::input(format!(
            "Failed to create report JSON '{}': {e}",
            path.display()
        ))
    })?;

    serde_json::to_writer_pretty(file, report)
        .map_err(|e| AppError::input(format!("Failed to write report JSON: {e}")))?;

    Ok(())
}

/// Read a report JSON file.
pub fn read_report_json(path: &Path) -> Result<ReportFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::input(format!(
            "Failed to open report JSON '{}': {e}",
            path.display()
        ))
    })?;
    let report: ReportFile = serde_json::from_reader(file)
        .map_err(|e| AppError::input(format!("Invalid report JSON: {e}")))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Fixture, StageRecord};
    use crate::report::compute_totals;
    use crate::stages;

    #[test]
    fn report_round_trips_through_json() {
        let mut state = PipelineState::new();
        let inputs = vec!["5".to_string()];
        let result = stages::recompute(Fixture::ToiletFlush, &inputs, Default::default());
        state.merge(StageRecord {
            fixture: Fixture::ToiletFlush,
            inputs,
            result,
        });
        let totals = compute_totals(&state);
        let report = build_report(&state, totals, Some("maria".to_string()));

        let path = std::env::temp_dir().join(format!("aqua-report-test-{}.json", std::process::id()));
        write_report_json(&path, &report).unwrap();
        let loaded = read_report_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.tool, "aqua");
        assert_eq!(loaded.user.as_deref(), Some("maria"));
        assert_eq!(loaded.stages, report.stages);
        assert!((loaded.totals.cost - totals.cost).abs() < 1e-12);
    }
}
