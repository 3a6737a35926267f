pub mod counters;
pub mod platform;

pub use counters::{CounterSample, CounterSource, SysfsCounters};
pub use platform::address::{IpLookup, IpSource};
pub use platform::{LinkProbe, LinkSource};
