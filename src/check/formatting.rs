//! Formatting utilities for check output
//!
//! This module renders bandwidth values with adaptive units and builds the single
//! line of plugin output, including the performance-data suffix after `|`.

use std::fmt;

use crate::check::errors::CheckError;
use crate::check::runner::{CheckOutcome, Measurement};
use crate::check::status::Status;

/// Formats a rate in bits per second with appropriate units
///
/// The unit tier is picked from the raw value (Gbps at 1e9, Mbps at 1e6, Kbps
/// at 1e3, bps below). Within a lower tier the figure is capped at `999.99`, so
/// two-decimal rounding never prints `1000.00` under the wrong unit.
///
/// # Examples
///
/// ```
/// use check_bandwidth::check::formatting::format_bandwidth;
///
/// assert_eq!(format_bandwidth(0.0), "0.00 bps");
/// assert_eq!(format_bandwidth(1_500.0), "1.50 Kbps");
/// assert_eq!(format_bandwidth(2_000_000.0), "2.00 Mbps");
/// assert_eq!(format_bandwidth(1_000_000_000.0), "1.00 Gbps");
/// ```
pub fn format_bandwidth(bps: f64) -> String {
    if bps >= 1_000_000_000.0 {
        return format!("{:.2} Gbps", bps / 1_000_000_000.0);
    }

    let (scaled, unit) = if bps >= 1_000_000.0 {
        (bps / 1_000_000.0, "Mbps")
    } else if bps >= 1_000.0 {
        (bps / 1_000.0, "Kbps")
    } else {
        (bps, "bps")
    };

    let scaled = if scaled >= 999.995 { 999.99 } else { scaled };
    format!("{:.2} {}", scaled, unit)
}

/// Renders the result line for a completed measurement
///
/// Shape: `<STATUS> - <rates>[ IP: <ip>][, Maxspeed: <n>mbps] | <perfdata>`
pub fn render_measurement(measurement: &Measurement) -> String {
    let rates = &measurement.rates;

    let summary = match measurement.direction {
        Some(direction) => format!("{}: {}", direction, format_bandwidth(rates.get(direction))),
        None => format!(
            "TX: {}, RX: {}",
            format_bandwidth(rates.tx_bps),
            format_bandwidth(rates.rx_bps)
        ),
    };

    let mut extras = Vec::new();
    if let Some(ip) = &measurement.ip_address {
        extras.push(format!("IP: {}", ip));
    }
    if let Some(speed) = measurement.max_speed_mbps {
        extras.push(format!("Maxspeed: {}mbps", speed));
    }

    let mut line = format!("{} - {}", measurement.status, summary);
    if !extras.is_empty() {
        line.push(' ');
        line.push_str(&extras.join(", "));
    }

    line.push_str(&format!(" | TX={}bps RX={}bps", rates.tx_bps, rates.rx_bps));
    if let Some(pct) = &measurement.percentages {
        line.push_str(&format!(" TX%={:.2}% RX%={:.2}%", pct.tx, pct.rx));
    }

    line
}

/// One line of plugin output and the status that decides the exit code
#[derive(Debug, Clone, PartialEq)]
pub struct PluginOutput {
    pub status: Status,
    pub line: String,
}

impl PluginOutput {
    pub fn unknown(detail: impl fmt::Display) -> Self {
        Self {
            status: Status::Unknown,
            line: format!("{}: {}", Status::Unknown, detail),
        }
    }

    pub fn link_down() -> Self {
        Self {
            status: Status::Critical,
            line: format!("{}: Link is DOWN", Status::Critical),
        }
    }

    pub fn from_result(result: Result<CheckOutcome, CheckError>) -> Self {
        match result {
            Ok(CheckOutcome::LinkDown) => Self::link_down(),
            Ok(CheckOutcome::Measured(measurement)) => Self {
                status: measurement.status,
                line: render_measurement(&measurement),
            },
            Err(err) => Self::unknown(err),
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.status.exit_code()
    }

    /// Prints the line to stdout and terminates with the mapped exit code
    pub fn print_and_exit(self) -> ! {
        println!("{}", self.line);
        std::process::exit(self.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::rate::{Direction, Percentages, Rates};

    fn measurement() -> Measurement {
        Measurement {
            direction: None,
            rates: Rates {
                tx_bps: 500_000_000.0,
                rx_bps: 1_600.0,
            },
            status: Status::Ok,
            max_speed_mbps: None,
            ip_address: None,
            percentages: None,
        }
    }

    #[test]
    fn test_format_bandwidth_tiers() {
        assert_eq!(format_bandwidth(0.0), "0.00 bps");
        assert_eq!(format_bandwidth(999.0), "999.00 bps");
        assert_eq!(format_bandwidth(1_000.0), "1.00 Kbps");
        assert_eq!(format_bandwidth(999_999.0), "999.99 Kbps");
        assert_eq!(format_bandwidth(1_000_000.0), "1.00 Mbps");
        assert_eq!(format_bandwidth(1_500_000.0), "1.50 Mbps");
        assert_eq!(format_bandwidth(1_000_000_000.0), "1.00 Gbps");
        assert_eq!(format_bandwidth(12_500_000_000.0), "12.50 Gbps");
    }

    #[test]
    fn test_format_bandwidth_never_rounds_into_next_tier() {
        assert_eq!(format_bandwidth(999_999_999.0), "999.99 Mbps");
        assert_eq!(format_bandwidth(999.999), "999.99 bps");
        assert_eq!(format_bandwidth(999_994_000.0), "999.99 Mbps");
    }

    #[test]
    fn test_render_both_directions_without_extras() {
        assert_eq!(
            render_measurement(&measurement()),
            "OK - TX: 500.00 Mbps, RX: 1.60 Kbps | TX=500000000bps RX=1600bps"
        );
    }

    #[test]
    fn test_render_single_direction_with_extras() {
        let mut m = measurement();
        m.direction = Some(Direction::Tx);
        m.status = Status::Warning;
        m.ip_address = Some("192.168.1.10".to_string());
        m.max_speed_mbps = Some(1000);
        m.percentages = Some(Percentages { tx: 50.0, rx: 0.00016 });

        assert_eq!(
            render_measurement(&m),
            "WARNING - TX: 500.00 Mbps IP: 192.168.1.10, Maxspeed: 1000mbps \
             | TX=500000000bps RX=1600bps TX%=50.00% RX%=0.00%"
        );
    }

    #[test]
    fn test_render_omits_missing_ip() {
        let mut m = measurement();
        m.direction = Some(Direction::Rx);
        m.max_speed_mbps = Some(10000);

        assert_eq!(
            render_measurement(&m),
            "OK - RX: 1.60 Kbps Maxspeed: 10000mbps | TX=500000000bps RX=1600bps"
        );
    }

    #[test]
    fn test_render_fractional_perfdata() {
        let mut m = measurement();
        m.rates = Rates {
            tx_bps: 1.6,
            rx_bps: 0.0,
        };

        assert!(render_measurement(&m).ends_with("| TX=1.6bps RX=0bps"));
    }

    #[test]
    fn test_plugin_output_variants() {
        let down = PluginOutput::from_result(Ok(CheckOutcome::LinkDown));
        assert_eq!(down.line, "CRITICAL: Link is DOWN");
        assert_eq!(down.exit_code(), 2);

        let failed = PluginOutput::from_result(Err(CheckError::CounterRead(
            "Failed to read tx_bytes: Permission denied".to_string(),
        )));
        assert_eq!(failed.line, "UNKNOWN: Failed to read tx_bytes: Permission denied");
        assert_eq!(failed.exit_code(), 3);

        let measured = PluginOutput::from_result(Ok(CheckOutcome::Measured(measurement())));
        assert_eq!(measured.status, Status::Ok);
        assert_eq!(measured.exit_code(), 0);
    }
}
