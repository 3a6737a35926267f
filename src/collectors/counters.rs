//! Interface byte counters
//!
//! Linux exposes per-interface statistics under `/sys/class/net/<iface>/statistics`.
//! The check reads `tx_bytes` and `rx_bytes` from there twice and derives rates
//! from the difference.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::trace;
use std::fs;
use std::path::PathBuf;

/// Default root of the per-interface sysfs tree
pub const SYSFS_NET_ROOT: &str = "/sys/class/net";

/// One reading of an interface's cumulative byte counters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterSample {
    /// Total bytes transmitted since the interface came up
    pub tx_bytes: u64,
    /// Total bytes received since the interface came up
    pub rx_bytes: u64,
    /// UTC timestamp when the counters were read
    pub captured_at: DateTime<Utc>,
}

/// Source of cumulative byte counters for a named interface
pub trait CounterSource: Send + Sync {
    fn sample(&self, interface: &str) -> Result<CounterSample>;
}

/// Reads counters from the sysfs statistics files
#[derive(Debug, Clone)]
pub struct SysfsCounters {
    root: PathBuf,
}

impl Default for SysfsCounters {
    fn default() -> Self {
        Self::new(SYSFS_NET_ROOT)
    }
}

impl SysfsCounters {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn counter_path(&self, interface: &str, counter: &str) -> PathBuf {
        self.root.join(interface).join("statistics").join(counter)
    }

    fn read_counter(&self, interface: &str, counter: &str) -> Result<u64> {
        let path = self.counter_path(interface, counter);
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        raw.trim()
            .parse::<u64>()
            .with_context(|| format!("Invalid counter value {:?} in {}", raw.trim(), path.display()))
    }
}

impl CounterSource for SysfsCounters {
    fn sample(&self, interface: &str) -> Result<CounterSample> {
        let tx_bytes = self.read_counter(interface, "tx_bytes")?;
        let rx_bytes = self.read_counter(interface, "rx_bytes")?;
        let captured_at = Utc::now();

        trace!(
            "Sampled {} at {}: tx_bytes={}, rx_bytes={}",
            interface, captured_at, tx_bytes, rx_bytes
        );

        Ok(CounterSample {
            tx_bytes,
            rx_bytes,
            captured_at,
        })
    }
}
