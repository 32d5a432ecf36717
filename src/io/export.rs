//! Export per-stage results to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts: one row per stage, raw inputs joined with `;`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{PipelineState, Totals};
use crate::error::AppError;

/// Write per-stage results (plus a totals row) to a CSV file.
pub fn write_results_csv(
    path: &Path,
    state: &PipelineState,
    totals: &Totals,
) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::input(format!(
            "Failed to create export CSV '{}': {e}",
            path.display()
        ))
    })?;

    writeln!(
        file,
        "stage,inputs,daily_liters,weekly_liters,monthly_liters,cost_brl"
    )
    .map_err(|e| AppError::input(format!("Failed to write export CSV header: {e}")))?;

    for record in state.records() {
        let r = &record.result;
        writeln!(
            file,
            "{},{},{:.4},{:.4},{:.4},{:.4}",
            serde_key(record.fixture),
            record.inputs.join(";"),
            r.daily_liters,
            r.weekly_liters,
            r.monthly_liters,
            r.cost,
        )
        .map_err(|e| AppError::input(format!("Failed to write export CSV row: {e}")))?;
    }

    writeln!(
        file,
        "total,,{:.4},{:.4},{:.4},{:.4}",
        totals.daily_liters, totals.weekly_liters, totals.monthly_liters, totals.cost,
    )
    .map_err(|e| AppError::input(format!("Failed to write export CSV totals: {e}")))?;

    Ok(())
}

/// The fixture's snake_case serde key, reused as its CSV identifier.
fn serde_key(fixture: crate::domain::Fixture) -> String {
    // Serialize via serde so the CSV and JSON identifiers can never diverge.
    serde_json::to_value(fixture)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_else(|| format!("{fixture:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Fixture;

    #[test]
    fn serde_key_is_snake_case() {
        assert_eq!(serde_key(Fixture::Kitchen), "kitchen");
        assert_eq!(serde_key(Fixture::ToiletFlush), "toilet_flush");
        assert_eq!(serde_key(Fixture::BathroomSink), "bathroom_sink");
    }
}
