//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - fixture identifiers and their form fields (`Fixture`)
//! - per-stage computed outputs (`StageResult`)
//! - the running accumulation across stages (`PipelineState`, `StageRecord`)
//! - run configuration and the exported report schema

pub mod types;

pub use types::*;
