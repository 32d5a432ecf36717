//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the estimation pipeline
//! - prints reports/bar charts
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, EstimateArgs, ReportArgs};
use crate::domain::EstimateConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `aqua` binary.
pub fn run() -> Result<(), AppError> {
    // We want plain `aqua` (and `aqua --flushes 5`) to behave like `aqua tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Estimate(args) => handle_estimate(args),
        Command::Report(args) => handle_report(args),
        Command::Tui(args) => handle_tui(args),
    }
}

fn handle_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let config = estimate_config_from_args(&args);
    let run = pipeline::run_estimate(&config);

    println!(
        "{}",
        crate::report::format_run_summary(&run.state, &run.totals)
    );

    if config.plot {
        println!(
            "{}",
            crate::plot::render_bar_chart(&run.state, config.plot_width)
        );
    }

    // Optional exports.
    if let Some(path) = &config.export_results {
        crate::io::write_results_csv(path, &run.state, &run.totals)?;
    }
    if let Some(path) = &config.export_report {
        let user = {
            use crate::session::Session;
            crate::session::EnvSession::from_env()
                .current_user()
                .map(str::to_string)
        };
        let report = crate::io::build_report(&run.state, run.totals, user);
        crate::io::write_report_json(path, &report)?;
    }

    Ok(())
}

fn handle_report(args: ReportArgs) -> Result<(), AppError> {
    let path = match args.file {
        Some(path) => crate::cli::picker::validate_report_path(&path)?,
        None => crate::cli::picker::prompt_for_report_path()?,
    };

    let report = crate::io::read_report_json(&path)?;
    println!("{}", crate::report::format_report_file(&report));
    Ok(())
}

fn handle_tui(args: EstimateArgs) -> Result<(), AppError> {
    crate::tui::run(&estimate_config_from_args(&args))
}

pub fn estimate_config_from_args(args: &EstimateArgs) -> EstimateConfig {
    EstimateConfig {
        washes_per_day: args.washes,
        faucet_minutes_per_use: args.faucet_minutes,
        flushes_per_day: args.flushes,
        showers_per_day: args.showers,
        minutes_per_shower: args.shower_minutes,
        sink_uses_per_day: args.sink_uses,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        export_results: args.export.clone(),
        export_report: args.export_report.clone(),
    }
}

/// Rewrite argv so `aqua` defaults to `aqua tui`.
///
/// Rules:
/// - `aqua`                      -> `aqua tui`
/// - `aqua --flushes 5 ...`      -> `aqua tui --flushes 5 ...`
/// - `aqua --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "estimate" | "report" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is (clap will report the unknown subcommand).
    argv
}
