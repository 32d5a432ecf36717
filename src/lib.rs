//! `aqua-budget` library crate.
//!
//! The binary (`aqua`) is a thin wrapper around this library so that:
//!
//! - the estimation pipeline is testable without spawning processes
//! - modules are reusable (e.g., future GUI/daemon front-ends)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod plot;
pub mod rates;
pub mod report;
pub mod session;
pub mod stages;
pub mod tui;
