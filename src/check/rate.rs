//! Rate calculation
//!
//! Converts two counter samples into bits-per-second rates and, when the link
//! speed is known, into utilisation percentages.

use clap::ValueEnum;
use log::warn;
use std::fmt;
use std::time::Duration;

use crate::collectors::counters::CounterSample;

/// Fixed wait between the two counter samples
pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(5);

/// Traffic direction on an interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    /// Transmitted traffic
    Tx,
    /// Received traffic
    Rx,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Tx => "TX",
            Direction::Rx => "RX",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bits-per-second rate for one counter over `interval`
///
/// A counter that went backwards (interface reset or wrap) contributes a zero
/// delta instead of an underflow.
pub fn bits_per_second(start: u64, end: u64, interval: Duration) -> f64 {
    let delta = match end.checked_sub(start) {
        Some(delta) => delta,
        None => {
            warn!(
                "Counter went backwards ({} -> {}), treating delta as zero",
                start, end
            );
            0
        }
    };

    delta as f64 * 8.0 / interval.as_secs_f64()
}

/// Transmit and receive rates in bits per second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    pub tx_bps: f64,
    pub rx_bps: f64,
}

impl Rates {
    pub fn between(start: &CounterSample, end: &CounterSample, interval: Duration) -> Self {
        Self {
            tx_bps: bits_per_second(start.tx_bytes, end.tx_bytes, interval),
            rx_bps: bits_per_second(start.rx_bytes, end.rx_bytes, interval),
        }
    }

    pub fn get(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Tx => self.tx_bps,
            Direction::Rx => self.rx_bps,
        }
    }

    /// Link utilisation for both directions, `None` when the speed is zero
    pub fn percentages(&self, max_speed_mbps: u64) -> Option<Percentages> {
        if max_speed_mbps == 0 {
            return None;
        }

        let capacity_bps = max_speed_mbps as f64 * 1_000_000.0;
        Some(Percentages {
            tx: self.tx_bps / capacity_bps * 100.0,
            rx: self.rx_bps / capacity_bps * 100.0,
        })
    }
}

/// Share of the negotiated link speed in use, per direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentages {
    pub tx: f64,
    pub rx: f64,
}
