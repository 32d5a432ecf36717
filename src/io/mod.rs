//! Input/output helpers.
//!
//! - per-stage result exports (CSV) (`export`)
//! - report JSON read/write (`report_file`)

pub mod export;
pub mod report_file;

pub use export::*;
pub use report_file::*;
