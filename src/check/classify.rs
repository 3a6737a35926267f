use crate::check::rate::{Direction, Rates};
use crate::check::status::Status;
use crate::check::thresholds::Thresholds;

/// Classifies a single rate; both limits are inclusive
pub fn classify(rate_bps: f64, thresholds: &Thresholds) -> Status {
    if rate_bps >= thresholds.critical {
        Status::Critical
    } else if rate_bps >= thresholds.warning {
        Status::Warning
    } else {
        Status::Ok
    }
}

/// Overall status for a measurement
///
/// With a direction filter only that direction counts, otherwise the worse of
/// TX and RX wins.
pub fn evaluate(rates: &Rates, direction: Option<Direction>, thresholds: &Thresholds) -> Status {
    match direction {
        Some(direction) => classify(rates.get(direction), thresholds),
        None => classify(rates.tx_bps, thresholds).worse(classify(rates.rx_bps, thresholds)),
    }
}
