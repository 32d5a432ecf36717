//! Interactive report-file picker.
//!
//! This is intentionally kept separate from clap parsing:
//! - clap handles structured flags/subcommands
//! - the picker provides the "run `aqua report` and choose a file" UX
//!
//! A `.json` extension is not enough to qualify as a candidate: the tree
//! around a report often holds lockfiles and editor configs. Discovery and
//! validation therefore share one check: the file must deserialize as a
//! report written by this tool.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::io::read_report_json;

/// Default directory recursion depth for finding report files.
const DEFAULT_SEARCH_DEPTH: usize = 3;

/// Prompt the user to select a report from the current directory tree.
///
/// Behavior:
/// - list discovered report files (JSON that reloads as an `aqua` report)
/// - accept either a number (from the list) or an explicit path
/// - `q` cancels
pub fn prompt_for_report_path() -> Result<PathBuf, AppError> {
    let files = discover_report_files();
    if files.is_empty() {
        return Err(AppError::input(
            "No report files found. Write one with `aqua estimate --export-report <report.json>`.",
        ));
    }

    println!("Found {} report file(s):", files.len());
    for (idx, path) in files.iter().enumerate() {
        println!("{:>3}) {}", idx + 1, pretty_path(path));
    }

    loop {
        print!(
            "Select a file by number (1-{}) or type a path (q to quit): ",
            files.len()
        );
        io::stdout()
            .flush()
            .map_err(|e| AppError::input(format!("Failed to write prompt: {e}")))?;

        let mut input = String::new();
        let bytes = io::stdin()
            .read_line(&mut input)
            .map_err(|e| AppError::input(format!("Failed to read input: {e}")))?;

        if bytes == 0 {
            return Err(AppError::input(
                "No input received. Provide a report path with `aqua report --file <report.json>`.",
            ));
        }

        let input = input.trim();
        if input.eq_ignore_ascii_case("q") {
            return Err(AppError::input("Canceled."));
        }

        if let Ok(choice) = input.parse::<usize>() {
            if (1..=files.len()).contains(&choice) {
                return validate_report_path(&files[choice - 1]);
            }
            println!(
                "Invalid choice: {choice}. Enter a number between 1 and {}.",
                files.len()
            );
            continue;
        }

        let candidate = PathBuf::from(input);
        match validate_report_path(&candidate) {
            Ok(path) => return Ok(path),
            Err(err) => {
                println!("{err}");
                continue;
            }
        }
    }
}

/// Validate that the provided path holds a reloadable report.
///
/// Existence and extension are checked first for specific messages; the
/// file must then actually deserialize as an `aqua` report, so arbitrary
/// JSON (a `package.json`, a lockfile) is rejected here rather than
/// failing later in the reload step.
pub fn validate_report_path(path: &Path) -> Result<PathBuf, AppError> {
    if !path.exists() {
        return Err(AppError::input(format!(
            "Report file not found: {}",
            path.display()
        )));
    }
    if path.is_dir() {
        return Err(AppError::input(format!(
            "Expected a file, got a directory: {}",
            path.display()
        )));
    }
    if !has_json_extension(path) {
        return Err(AppError::input(format!(
            "Expected a .json file (got: {}). Use --file to pass a report path.",
            path.display()
        )));
    }

    let report = read_report_json(path).map_err(|_| not_a_report(path))?;
    if report.tool != "aqua" {
        return Err(not_a_report(path));
    }

    Ok(path.to_path_buf())
}

fn not_a_report(path: &Path) -> AppError {
    AppError::input(format!(
        "Not an aqua report: {} (expected JSON written by `aqua estimate --export-report`).",
        path.display()
    ))
}

/// Discover report files under the current directory (deterministic order).
///
/// Candidates are `.json` files that pass [`validate_report_path`]'s
/// deserialization check, so the prompt never offers a file that cannot be
/// reloaded.
pub fn discover_report_files() -> Vec<PathBuf> {
    let mut out = Vec::new();
    walk_for_reports(Path::new("."), 0, &mut out);
    out.sort_by(|a, b| pretty_path(a).cmp(&pretty_path(b)));
    out
}

fn walk_for_reports(root: &Path, depth: usize, out: &mut Vec<PathBuf>) {
    if depth > DEFAULT_SEARCH_DEPTH {
        return;
    }

    let Ok(entries) = fs::read_dir(root) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(_) => continue,
        };

        if file_type.is_dir() {
            if should_skip_dir(&path) {
                continue;
            }
            walk_for_reports(&path, depth + 1, out);
        } else if file_type.is_file() && is_report_file(&path) {
            out.push(path);
        }
    }
}

/// Quick candidate check shared by discovery: extension plus a real reload.
fn is_report_file(path: &Path) -> bool {
    has_json_extension(path)
        && read_report_json(path)
            .map(|report| report.tool == "aqua")
            .unwrap_or(false)
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        == Some(true)
}

fn should_skip_dir(path: &Path) -> bool {
    let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
    matches!(name, ".git" | "target" | "node_modules")
}

fn pretty_path(path: &Path) -> String {
    let stripped = path.strip_prefix("./").unwrap_or(path);
    stripped.display().to_string()
}
