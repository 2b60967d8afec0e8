//! Locale-dependent choices: which FAQ dataset to show and how circuit
//! dates are written.

pub mod dataset;
pub mod date_pattern;
pub mod tag;
