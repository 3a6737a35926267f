use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use super::{LinkProbe, run_tool};

/// Line `ethtool` prints for an interface with carrier
pub const LINK_DETECTED_MARKER: &str = "Link detected: yes";

const SPEED_LABEL: &str = "Speed:";

/// Facts extracted from one `ethtool <iface>` report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkFacts {
    pub link_up: bool,
    pub max_speed_mbps: Option<u64>,
}

/// Extracts link state and speed from raw `ethtool` text
///
/// The speed is the digits of the token after the first `Speed:` label, so
/// `Speed: 1000Mb/s` gives 1000 and `Speed: Unknown!` gives `None`.
pub fn parse_ethtool_output(text: &str) -> LinkFacts {
    let max_speed_mbps = text
        .lines()
        .find(|line| line.contains(SPEED_LABEL))
        .and_then(|line| line.split(SPEED_LABEL).nth(1))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|token| {
            let digits: String = token.chars().filter(char::is_ascii_digit).collect();
            digits.parse::<u64>().ok()
        });

    LinkFacts {
        link_up: text.contains(LINK_DETECTED_MARKER),
        max_speed_mbps,
    }
}

/// Link probe backed by the `ethtool` command
pub struct EthtoolProbe {
    program: String,
}

impl Default for EthtoolProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl EthtoolProbe {
    pub fn new() -> Self {
        Self::with_program("ethtool")
    }

    /// Uses a different executable, e.g. an absolute path
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn query(&self, interface: &str) -> Result<LinkFacts> {
        let output = run_tool(&self.program, &[interface]).await?;
        Ok(parse_ethtool_output(&output))
    }
}

#[async_trait]
impl LinkProbe for EthtoolProbe {
    async fn link_up(&self, interface: &str) -> Result<bool> {
        let facts = self.query(interface).await?;
        debug!("ethtool reports link_up={} for {}", facts.link_up, interface);
        Ok(facts.link_up)
    }

    async fn max_speed_mbps(&self, interface: &str) -> Option<u64> {
        match self.query(interface).await {
            Ok(facts) => facts.max_speed_mbps,
            Err(err) => {
                debug!("Speed lookup for {} failed: {:#}", interface, err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UP_OUTPUT: &str = "Settings for eth0:
\tSupported ports: [ TP ]
\tSupported link modes:   10baseT/Half 10baseT/Full
\t                        100baseT/Half 100baseT/Full
\t                        1000baseT/Full
\tSpeed: 1000Mb/s
\tDuplex: Full
\tAuto-negotiation: on
\tPort: Twisted Pair
\tLink detected: yes
";

    const DOWN_OUTPUT: &str = "Settings for eth1:
\tSpeed: Unknown!
\tDuplex: Unknown! (255)
\tLink detected: no
";

    #[test]
    fn test_parse_link_up_with_speed() {
        let facts = parse_ethtool_output(UP_OUTPUT);
        assert!(facts.link_up);
        assert_eq!(facts.max_speed_mbps, Some(1000));
    }

    #[test]
    fn test_parse_link_down_without_speed() {
        let facts = parse_ethtool_output(DOWN_OUTPUT);
        assert!(!facts.link_up);
        assert_eq!(facts.max_speed_mbps, None);
    }

    #[test]
    fn test_parse_high_speed() {
        let facts = parse_ethtool_output("\tSpeed: 25000Mb/s\n\tLink detected: yes\n");
        assert_eq!(facts.max_speed_mbps, Some(25000));
    }

    #[test]
    fn test_parse_empty_output() {
        assert_eq!(
            parse_ethtool_output(""),
            LinkFacts {
                link_up: false,
                max_speed_mbps: None
            }
        );
    }

    #[tokio::test]
    async fn test_missing_program_fails_link_check_but_not_speed() {
        let probe = EthtoolProbe::with_program("/nonexistent/ethtool");
        assert!(probe.link_up("eth0").await.is_err());
        assert_eq!(probe.max_speed_mbps("eth0").await, None);
    }
}
