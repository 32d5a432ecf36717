//! Command-line parsing for the water-budget estimator.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the estimation code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod picker;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "aqua", version, about = "Household water consumption & cost estimator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the full estimation pipeline from flags and print the summary.
    Estimate(EstimateArgs),
    /// Re-print the summary of a previously exported report JSON.
    Report(ReportArgs),
    /// Launch the interactive TUI (one screen per stage, live recompute).
    ///
    /// This uses the same underlying estimation pipeline as `aqua estimate`,
    /// but walks the stages as forms in a terminal UI.
    Tui(EstimateArgs),
}

/// Common options for estimating.
///
/// Defaults mirror the initial form values of the stage screens.
#[derive(Debug, Parser, Clone)]
pub struct EstimateArgs {
    /// Dish washes per day (kitchen).
    #[arg(long, default_value_t = 1)]
    pub washes: u32,

    /// Kitchen faucet minutes per use.
    #[arg(long = "faucet-minutes", default_value_t = 10)]
    pub faucet_minutes: u32,

    /// Toilet flushes per day.
    #[arg(long, default_value_t = 0)]
    pub flushes: u32,

    /// Showers per day.
    #[arg(long, default_value_t = 1)]
    pub showers: u32,

    /// Minutes per shower.
    #[arg(long = "shower-minutes", default_value_t = 10)]
    pub shower_minutes: u32,

    /// Bathroom sink uses per day.
    #[arg(long = "sink-uses", default_value_t = 0)]
    pub sink_uses: u32,

    /// Render an ASCII bar chart in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal bar chart.
    #[arg(long)]
    pub no_plot: bool,

    /// Bar chart width (columns).
    #[arg(long, default_value_t = 40)]
    pub width: usize,

    /// Export per-stage results to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the full report (stages + totals) to JSON.
    #[arg(long = "export-report")]
    pub export_report: Option<PathBuf>,
}

/// Options for re-printing a saved report.
#[derive(Debug, Parser)]
pub struct ReportArgs {
    /// Report JSON file produced by `aqua estimate --export-report`.
    ///
    /// When omitted, an interactive picker lists discovered report files.
    #[arg(long, value_name = "JSON")]
    pub file: Option<PathBuf>,
}
