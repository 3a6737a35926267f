use check_bandwidth::check::{BandwidthCheck, PluginOutput};
use check_bandwidth::cli::{Cli, usage_error_summary};
use check_bandwidth::collectors::SysfsCounters;
use check_bandwidth::collectors::platform::address::create_ip_lookup;
use check_bandwidth::collectors::platform::create_link_probe;
use clap::Parser;
use clap::error::ErrorKind;
use log::warn;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => PluginOutput::unknown(usage_error_summary(&err)).print_and_exit(),
    };

    let thresholds = cli.thresholds();
    if thresholds.is_inverted() {
        warn!(
            "Warning threshold ({} bps) is above critical threshold ({} bps)",
            thresholds.warning, thresholds.critical
        );
    }

    let check = BandwidthCheck::new(
        cli.check_options(),
        create_link_probe(cli.link_source, &cli.sysfs_root),
        Box::new(SysfsCounters::new(&cli.sysfs_root)),
        create_ip_lookup(cli.ip_source),
    );

    PluginOutput::from_result(check.run().await).print_and_exit();
}
