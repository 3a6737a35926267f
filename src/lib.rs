//! Network interface bandwidth check for monitoring systems
//!
//! Samples an interface's byte counters, turns them into bits-per-second rates
//! and classifies them against warning and critical thresholds, reporting the
//! result as a single plugin output line and exit code.

pub mod check;
pub mod cli;
pub mod collectors;
