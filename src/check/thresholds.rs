//! Threshold parsing
//!
//! Thresholds are given on the command line as human-readable bandwidth strings
//! such as `1.5 Gbps`, `500 Mbps` or `100kbps`. Internally every rate is a plain
//! `f64` in bits per second.

use thiserror::Error;

/// Default warning threshold, 1.5 Gbps
pub const DEFAULT_WARNING_BPS: f64 = 1_500_000_000.0;

/// Default critical threshold, 9 Gbps
pub const DEFAULT_CRITICAL_BPS: f64 = 9_000_000_000.0;

/// Recognized unit suffixes, checked in this order against the lowercased input
const UNITS: [(&str, f64); 3] = [
    ("gbps", 1_000_000_000.0),
    ("mbps", 1_000_000.0),
    ("kbps", 1_000.0),
];

#[derive(Debug, Error, PartialEq)]
pub enum ThresholdError {
    #[error("unrecognized bandwidth unit in '{0}' (expected kbps, mbps or gbps)")]
    UnknownUnit(String),

    #[error("invalid bandwidth value in '{0}'")]
    InvalidNumber(String),
}

/// Parses a human-readable bandwidth string into bits per second
///
/// The unit is matched case-insensitively anywhere in the input, and whatever
/// remains once the unit is removed must be a finite, non-negative number.
/// Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use check_bandwidth::check::thresholds::parse_bandwidth;
///
/// assert_eq!(parse_bandwidth("1.5 Gbps"), Ok(1_500_000_000.0));
/// assert_eq!(parse_bandwidth("500 Mbps"), Ok(500_000_000.0));
/// assert_eq!(parse_bandwidth("100kbps"), Ok(100_000.0));
/// assert!(parse_bandwidth("100 bps").is_err());
/// ```
pub fn parse_bandwidth(input: &str) -> Result<f64, ThresholdError> {
    let lowered = input.to_lowercase();

    let (unit, multiplier) = UNITS
        .iter()
        .find(|(unit, _)| lowered.contains(unit))
        .ok_or_else(|| ThresholdError::UnknownUnit(input.to_string()))?;

    let value: f64 = lowered
        .replace(unit, "")
        .trim()
        .parse()
        .map_err(|_| ThresholdError::InvalidNumber(input.to_string()))?;

    if !value.is_finite() || value < 0.0 {
        return Err(ThresholdError::InvalidNumber(input.to_string()));
    }

    Ok(value * multiplier)
}

/// Warning and critical limits in bits per second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub warning: f64,
    pub critical: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning: DEFAULT_WARNING_BPS,
            critical: DEFAULT_CRITICAL_BPS,
        }
    }
}

impl Thresholds {
    pub fn new(warning: f64, critical: f64) -> Self {
        Self { warning, critical }
    }

    /// True when the warning limit sits above the critical one, which makes
    /// WARNING unreachable
    pub fn is_inverted(&self) -> bool {
        self.warning > self.critical
    }
}
