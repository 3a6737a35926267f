use clap::Parser;
use std::path::PathBuf;

use crate::check::rate::Direction;
use crate::check::runner::CheckOptions;
use crate::check::thresholds::{Thresholds, parse_bandwidth};
use crate::collectors::counters::SYSFS_NET_ROOT;
use crate::collectors::platform::LinkSource;
use crate::collectors::platform::address::IpSource;

/// Command-line interface of the check_bandwidth plugin
/// Uses clap's derive macros for automatic CLI generation
#[derive(Parser, Debug)]
#[command(name = "check_bandwidth")]
#[command(author = "Kaipo Chen")]
#[command(version)] // Automatically uses version from Cargo.toml
#[command(about = "Monitoring plugin that checks a network interface's bandwidth against thresholds")]
#[command(long_about = "Samples the transmit and receive byte counters of one interface 5 seconds apart, \
converts the difference to bits per second and compares it with warning and critical thresholds. \
Prints a single status line with performance data and exits 0 (OK), 1 (WARNING), 2 (CRITICAL) or 3 (UNKNOWN).\n\n\
Examples:\n  \
check_bandwidth -i eth0                               # Default 1.5 Gbps / 9 Gbps thresholds\n  \
check_bandwidth -i eth0 -d rx -w 500mbps -c 900mbps   # Receive traffic only\n  \
check_bandwidth -i eth0 -p                            # Add link utilisation to perfdata")]
pub struct Cli {
    /// Interface whose traffic is measured
    #[arg(short, long, help = "Network interface to check (e.g. eth0)")]
    pub interface: String,

    /// Restrict classification to one direction; both are checked when omitted
    #[arg(short, long, value_enum, help = "Only classify this direction: tx or rx")]
    pub direction: Option<Direction>,

    #[arg(
        short,
        long,
        default_value = "1.5 Gbps",
        value_parser = parse_bandwidth,
        help = "Warning threshold with unit: kbps, mbps or gbps"
    )]
    pub warning: f64,

    #[arg(
        short,
        long,
        default_value = "9 Gbps",
        value_parser = parse_bandwidth,
        help = "Critical threshold with unit: kbps, mbps or gbps"
    )]
    pub critical: f64,

    /// Append utilisation of the negotiated link speed to the performance data
    #[arg(short, long, help = "Show bandwidth as a percentage of the link speed")]
    pub percentage: bool,

    #[arg(
        long,
        value_enum,
        default_value_t = LinkSource::Ethtool,
        help = "Where link state and speed come from"
    )]
    pub link_source: LinkSource,

    #[arg(
        long,
        value_enum,
        default_value_t = IpSource::Ip,
        help = "Where the interface address comes from"
    )]
    pub ip_source: IpSource,

    /// Root of the per-interface sysfs tree, overridable for testing
    #[arg(long, default_value = SYSFS_NET_ROOT, hide = true)]
    pub sysfs_root: PathBuf,
}

impl Cli {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.warning, self.critical)
    }

    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            interface: self.interface.clone(),
            direction: self.direction,
            thresholds: self.thresholds(),
            percentage: self.percentage,
        }
    }
}
