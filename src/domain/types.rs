//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while the user walks through the stage screens
//! - exported to JSON/CSV
//! - reloaded later to re-print a summary

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One fixture-specific estimation stage.
///
/// Stages are visited in the order of [`Fixture::ALL`]; each contributes a
/// disjoint record to the pipeline state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fixture {
    Kitchen,
    ToiletFlush,
    Shower,
    BathroomSink,
}

impl Fixture {
    /// Pipeline traversal order.
    pub const ALL: [Fixture; 4] = [
        Fixture::Kitchen,
        Fixture::ToiletFlush,
        Fixture::Shower,
        Fixture::BathroomSink,
    ];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Fixture::Kitchen => "Kitchen",
            Fixture::ToiletFlush => "Toilet flush",
            Fixture::Shower => "Shower",
            Fixture::BathroomSink => "Bathroom sink",
        }
    }

    /// Labels of the raw input fields this stage declares, in form order.
    pub fn field_labels(self) -> &'static [&'static str] {
        match self {
            Fixture::Kitchen => &["Dish washes per day", "Faucet minutes per use"],
            Fixture::ToiletFlush => &["Flushes per day"],
            Fixture::Shower => &["Showers per day", "Minutes per shower"],
            Fixture::BathroomSink => &["Sink uses per day"],
        }
    }

    /// Default raw field values (mirrors the initial form values).
    pub fn default_fields(self) -> &'static [&'static str] {
        match self {
            Fixture::Kitchen => &["1", "10"],
            Fixture::ToiletFlush => &["0"],
            Fixture::Shower => &["1", "10"],
            Fixture::BathroomSink => &["0"],
        }
    }
}

/// Computed liters/cost output of one stage for its current valid inputs.
///
/// Immutable once produced; a recompute yields a fresh value. All fields are
/// non-negative for non-negative integer inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StageResult {
    pub daily_liters: f64,
    pub weekly_liters: f64,
    pub monthly_liters: f64,
    /// Estimated monthly cost in R$.
    pub cost: f64,
}

/// One stage's contribution to the pipeline: the raw inputs it was computed
/// from plus the computed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageRecord {
    pub fixture: Fixture,
    /// Raw text field values in `field_labels` order.
    pub inputs: Vec<String>,
    pub result: StageResult,
}

/// Ordered accumulation of stage records across a forward traversal.
///
/// The accumulator is a pure pass-through merge: it never recomputes anything.
/// Re-entering a stage replaces that stage's own record in place; the state
/// never shrinks within a traversal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineState {
    records: Vec<StageRecord>,
}

impl PipelineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a newly computed stage record into the state.
    ///
    /// Records are keyed by fixture: a record for an already-visited fixture
    /// replaces the old one (same position), anything else is appended in
    /// traversal order.
    pub fn merge(&mut self, record: StageRecord) {
        match self.records.iter_mut().find(|r| r.fixture == record.fixture) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    pub fn records(&self) -> &[StageRecord] {
        &self.records
    }

    pub fn get(&self, fixture: Fixture) -> Option<&StageRecord> {
        self.records.iter().find(|r| r.fixture == fixture)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Combined totals over all stages in a pipeline state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub daily_liters: f64,
    pub weekly_liters: f64,
    pub monthly_liters: f64,
    pub cost: f64,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct EstimateConfig {
    pub washes_per_day: u32,
    pub faucet_minutes_per_use: u32,
    pub flushes_per_day: u32,
    pub showers_per_day: u32,
    pub minutes_per_shower: u32,
    pub sink_uses_per_day: u32,

    pub plot: bool,
    pub plot_width: usize,

    pub export_results: Option<PathBuf>,
    pub export_report: Option<PathBuf>,
}

/// A saved report file (JSON).
///
/// This is the "portable" representation of a finished run: per-stage inputs
/// and results plus combined totals, enough to re-print the summary later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportFile {
    pub tool: String,
    pub generated_on: NaiveDate,
    /// Signed-in user at export time, if any.
    pub user: Option<String>,
    pub stages: Vec<StageRecord>,
    pub totals: Totals,
}
