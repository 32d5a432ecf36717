//! Terminal plotting helpers.

pub mod bars;

pub use bars::*;
