use clap::Parser;

use crate::probes::ProbeRequest;

/// Command-line arguments for the sysprobe tool.
///
/// Each probe kind corresponds to one boolean flag; flags compose freely.
/// An empty selection is valid and yields an empty report, not an error.
#[derive(Parser, Debug)]
#[clap(name = "sysprobe", about = "Gather a snapshot of system information")]
pub struct Args {
    /// Gather basic system information (OS, hostname, kernel, architecture)
    #[clap(long)]
    pub basic: bool,

    /// Gather memory information
    #[clap(long)]
    pub memory: bool,

    /// Gather disk usage for the root filesystem
    #[clap(long)]
    pub disk: bool,

    /// Gather network information (IP address and interfaces)
    #[clap(long)]
    pub network: bool,

    /// Gather the Wi-Fi network name (Windows only)
    #[clap(long)]
    pub wifi: bool,

    /// Gather battery status
    #[clap(long)]
    pub battery: bool,

    /// Gather system uptime
    #[clap(long)]
    pub uptime: bool,

    /// Per-probe timeout in seconds; a probe exceeding it is dropped from the report
    #[clap(long, default_value = "10")]
    pub probe_timeout: u64,

    /// Emit the report as JSON instead of plain text
    #[clap(long)]
    pub json: bool,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Build the probe selection from the parsed flags.
    pub fn to_request(&self) -> ProbeRequest {
        ProbeRequest {
            basic: self.basic,
            memory: self.memory,
            disk: self.disk,
            network: self.network,
            wifi: self.wifi,
            battery: self.battery,
            uptime: self.uptime,
        }
    }
}
