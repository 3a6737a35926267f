use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use std::fs;
use std::path::PathBuf;

use super::LinkProbe;

/// Link probe reading the kernel's own view of the interface
///
/// `carrier` holds `1` when a link is detected. Reading it fails with EINVAL
/// while the interface is administratively down, in which case `operstate`
/// decides. `speed` holds Mbps, or `-1` when unknown.
pub struct SysfsLinkProbe {
    root: PathBuf,
}

impl SysfsLinkProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_attribute(&self, interface: &str, attribute: &str) -> Result<String> {
        let path = self.root.join(interface).join(attribute);
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(raw.trim().to_string())
    }

    fn interface_dir(&self, interface: &str) -> PathBuf {
        self.root.join(interface)
    }
}

#[async_trait]
impl LinkProbe for SysfsLinkProbe {
    async fn link_up(&self, interface: &str) -> Result<bool> {
        if !self.interface_dir(interface).exists() {
            return Err(anyhow::anyhow!("No such interface: {}", interface));
        }

        match self.read_attribute(interface, "carrier") {
            Ok(carrier) => Ok(carrier == "1"),
            Err(err) => {
                debug!("{:#}, falling back to operstate", err);
                let state = self.read_attribute(interface, "operstate")?;
                Ok(state == "up")
            }
        }
    }

    async fn max_speed_mbps(&self, interface: &str) -> Option<u64> {
        let raw = match self.read_attribute(interface, "speed") {
            Ok(raw) => raw,
            Err(err) => {
                debug!("Speed lookup for {} failed: {:#}", interface, err);
                return None;
            }
        };

        match raw.parse::<i64>() {
            Ok(speed) if speed > 0 => Some(speed as u64),
            _ => {
                debug!("No usable speed for {}: {:?}", interface, raw);
                None
            }
        }
    }
}
