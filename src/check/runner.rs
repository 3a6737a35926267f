//! End-to-end bandwidth check
//!
//! `BandwidthCheck` runs the whole pipeline once: link probe, speed probe, two
//! counter samples around a fixed wait, rate calculation, classification and
//! the best-effort address lookup. Every system-facing step goes through a
//! trait object so tests can drive it with fakes.

use log::{debug, info, warn};
use std::future::Future;
use std::io;
use std::pin::Pin;

use crate::check::classify::evaluate;
use crate::check::errors::CheckError;
use crate::check::rate::{Direction, Percentages, Rates, SAMPLE_INTERVAL};
use crate::check::status::Status;
use crate::check::thresholds::Thresholds;
use crate::collectors::counters::{CounterSample, CounterSource};
use crate::collectors::platform::LinkProbe;
use crate::collectors::platform::address::IpLookup;

/// What to check and how to judge it
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOptions {
    pub interface: String,
    pub direction: Option<Direction>,
    pub thresholds: Thresholds,
    /// Report link utilisation percentages in the performance data
    pub percentage: bool,
}

/// Everything the output line is rendered from
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub direction: Option<Direction>,
    pub rates: Rates,
    pub status: Status,
    pub max_speed_mbps: Option<u64>,
    pub ip_address: Option<String>,
    pub percentages: Option<Percentages>,
}

/// Non-error ways a check can end
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// The interface has no link; nothing was sampled
    LinkDown,
    Measured(Measurement),
}

/// Future that resolves when the user asks the check to stop
pub type InterruptFuture = Pin<Box<dyn Future<Output = io::Result<()>> + Send>>;

type InterruptSource = Box<dyn Fn() -> InterruptFuture + Send + Sync>;

pub struct BandwidthCheck {
    options: CheckOptions,
    link_probe: Box<dyn LinkProbe>,
    counters: Box<dyn CounterSource>,
    ip_lookup: Box<dyn IpLookup>,
    interrupt: InterruptSource,
}

impl BandwidthCheck {
    pub fn new(
        options: CheckOptions,
        link_probe: Box<dyn LinkProbe>,
        counters: Box<dyn CounterSource>,
        ip_lookup: Box<dyn IpLookup>,
    ) -> Self {
        Self {
            options,
            link_probe,
            counters,
            ip_lookup,
            interrupt: Box::new(|| -> InterruptFuture { Box::pin(tokio::signal::ctrl_c()) }),
        }
    }

    /// Replaces Ctrl-C as the signal that ends the sampling wait early
    pub fn with_interrupt<F, Fut>(mut self, interrupt: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = io::Result<()>> + Send + 'static,
    {
        self.interrupt = Box::new(move || -> InterruptFuture { Box::pin(interrupt()) });
        self
    }

    pub async fn run(&self) -> Result<CheckOutcome, CheckError> {
        let interface = self.options.interface.as_str();

        let link_up = self
            .link_probe
            .link_up(interface)
            .await
            .map_err(CheckError::link_probe)?;
        if !link_up {
            info!("Link on {} is down, skipping sampling", interface);
            return Ok(CheckOutcome::LinkDown);
        }

        let max_speed_mbps = self.link_probe.max_speed_mbps(interface).await;
        debug!("Max speed for {}: {:?} Mbps", interface, max_speed_mbps);

        let start = self.sample(interface)?;
        self.wait_interval(interface).await?;
        let end = self.sample(interface)?;

        let rates = Rates::between(&start, &end, SAMPLE_INTERVAL);
        let status = evaluate(&rates, self.options.direction, &self.options.thresholds);
        info!(
            "{}: tx={} bps, rx={} bps -> {}",
            interface, rates.tx_bps, rates.rx_bps, status
        );

        let percentages = if self.options.percentage {
            max_speed_mbps.and_then(|speed| rates.percentages(speed))
        } else {
            None
        };

        let ip_address = self.ip_lookup.ipv4_address(interface).await;

        Ok(CheckOutcome::Measured(Measurement {
            direction: self.options.direction,
            rates,
            status,
            max_speed_mbps,
            ip_address,
            percentages,
        }))
    }

    fn sample(&self, interface: &str) -> Result<CounterSample, CheckError> {
        self.counters
            .sample(interface)
            .map_err(CheckError::counter_read)
    }

    /// Sleeps for the sample interval, ending early on an interrupt
    async fn wait_interval(&self, interface: &str) -> Result<(), CheckError> {
        let sleep = tokio::time::sleep(SAMPLE_INTERVAL);
        tokio::pin!(sleep);

        tokio::select! {
            _ = &mut sleep => Ok(()),
            signal = (self.interrupt)() => match signal {
                Ok(()) => Err(CheckError::Interrupted {
                    interface: interface.to_string(),
                }),
                Err(err) => {
                    warn!("Unable to listen for interrupts: {}", err);
                    (&mut sleep).await;
                    Ok(())
                }
            },
        }
    }
}
