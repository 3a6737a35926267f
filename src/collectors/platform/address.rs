use async_trait::async_trait;
use clap::ValueEnum;
use log::debug;

use super::run_tool;

/// Best-effort IPv4 address lookup, used only to decorate the output line
#[async_trait]
pub trait IpLookup: Send + Sync {
    async fn ipv4_address(&self, interface: &str) -> Option<String>;
}

/// Which backend answers the address lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IpSource {
    /// Parse the text output of `ip addr show <iface>`
    Ip,
    /// Ask the OS interface list directly
    Native,
}

pub fn create_ip_lookup(source: IpSource) -> Box<dyn IpLookup> {
    match source {
        IpSource::Ip => Box::new(IpCommandLookup::new()),
        IpSource::Native => Box::new(NativeIpLookup),
    }
}

/// Extracts the first IPv4 address from `ip addr show` output
///
/// Matches the first line containing `inet ` (so `inet6` lines are skipped)
/// and drops the `/prefix` suffix.
pub fn parse_inet_address(text: &str) -> Option<String> {
    let line = text.lines().find(|line| line.contains("inet "))?;
    let (_, rest) = line.split_once("inet ")?;
    let cidr = rest.split_whitespace().next()?;
    let address = cidr.split('/').next()?;

    if address.is_empty() {
        None
    } else {
        Some(address.to_string())
    }
}

pub struct IpCommandLookup {
    program: String,
}

impl Default for IpCommandLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl IpCommandLookup {
    pub fn new() -> Self {
        Self::with_program("ip")
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl IpLookup for IpCommandLookup {
    async fn ipv4_address(&self, interface: &str) -> Option<String> {
        match run_tool(&self.program, &["addr", "show", interface]).await {
            Ok(output) => parse_inet_address(&output),
            Err(err) => {
                debug!("Address lookup for {} failed: {:#}", interface, err);
                None
            }
        }
    }
}

/// Address lookup through `if-addrs`, without spawning a process
pub struct NativeIpLookup;

#[async_trait]
impl IpLookup for NativeIpLookup {
    async fn ipv4_address(&self, interface: &str) -> Option<String> {
        let interfaces = match if_addrs::get_if_addrs() {
            Ok(interfaces) => interfaces,
            Err(err) => {
                debug!("Failed to list interface addresses: {}", err);
                return None;
            }
        };

        interfaces
            .iter()
            .filter(|iface| iface.name == interface)
            .map(|iface| iface.ip())
            .find(|ip| ip.is_ipv4())
            .map(|ip| ip.to_string())
    }
}
