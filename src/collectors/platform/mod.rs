use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::ValueEnum;
use log::debug;
use std::path::Path;
use tokio::process::Command;

// Interface capability probes
// The check only needs two facts about a link (is it up, how fast is it) and a
// best-effort address. Each comes from a pluggable backend so the text-scraping
// heuristics can be swapped for structured sources without touching the check.

/// Address lookup through `ip addr show` or the native interface list
pub mod address;

/// Link state and speed scraped from `ethtool` output
pub mod ethtool;

/// Link state and speed read from `/sys/class/net/<iface>`
pub mod sysfs;

/// Answers the two link questions the check asks before sampling
#[async_trait]
pub trait LinkProbe: Send + Sync {
    /// Whether the interface reports an active link; errors are fatal to the check
    async fn link_up(&self, interface: &str) -> Result<bool>;

    /// Negotiated link speed in Mbps, or `None` when it cannot be determined
    async fn max_speed_mbps(&self, interface: &str) -> Option<u64>;
}

/// Which backend answers link state and speed queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LinkSource {
    /// Parse the text output of `ethtool <iface>`
    Ethtool,
    /// Read `carrier` and `speed` from sysfs
    Sysfs,
}

pub fn create_link_probe(source: LinkSource, sysfs_root: &Path) -> Box<dyn LinkProbe> {
    match source {
        LinkSource::Ethtool => Box::new(ethtool::EthtoolProbe::new()),
        LinkSource::Sysfs => Box::new(sysfs::SysfsLinkProbe::new(sysfs_root)),
    }
}

/// Runs an external tool and returns its stdout
///
/// A spawn failure or a non-zero exit status is an error. There is no timeout:
/// a hung tool blocks the check.
pub(crate) async fn run_tool(program: &str, args: &[&str]) -> Result<String> {
    let invocation = format!("{} {}", program, args.join(" "));

    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .with_context(|| format!("Failed to run {}", invocation))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow::anyhow!(
            "{} failed with {}: {}",
            invocation,
            output.status,
            stderr.trim()
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    debug!("{} produced {} bytes of output", invocation, stdout.len());
    Ok(stdout)
}
