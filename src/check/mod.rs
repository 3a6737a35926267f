//! Bandwidth check module
//!
//! Everything between "two counter samples" and "one plugin output line" lives
//! here. The collectors gather raw facts from the system; this module turns them
//! into a status and a line of text that a monitoring system understands.
//!
//! ## Module Organization
//!
//! - `thresholds`: Human-readable bandwidth parsing and the warning/critical pair
//! - `status`: Plugin status ordering and exit codes
//! - `rate`: Bits-per-second calculation and link utilisation percentages
//! - `classify`: Threshold classification and direction aggregation
//! - `formatting`: Unit formatting and the final output line
//! - `errors`: Fatal error paths that end the check as UNKNOWN
//! - `runner`: The end-to-end check over pluggable probes

pub mod classify;
pub mod errors;
pub mod formatting;
pub mod rate;
pub mod runner;
pub mod status;
pub mod thresholds;

pub use classify::{classify, evaluate};
pub use errors::CheckError;
pub use formatting::{PluginOutput, format_bandwidth};
pub use rate::{Direction, Percentages, Rates, SAMPLE_INTERVAL};
pub use runner::{BandwidthCheck, CheckOptions, CheckOutcome, Measurement};
pub use status::Status;
pub use thresholds::{ThresholdError, Thresholds, parse_bandwidth};
