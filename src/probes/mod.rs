//! The probe registry and the individual probe implementations.
//!
//! Each probe is an independent unit that queries one OS subsystem and
//! returns its key/value contributions or a probe-scoped failure. Probes
//! write disjoint key sets, so the collector can merge their results without
//! any coordination between them.
//!
//! ## Probe kinds
//!
//! - **Basic**: OS name, hostname, kernel release, OS version, architecture, CPU
//! - **Memory**: total and available memory in GB
//! - **Disk**: total/used/free space of the root filesystem in GB
//! - **Network**: resolved host IP address and per-interface addresses
//! - **Wifi**: associated Wi-Fi network name (Windows only)
//! - **Battery**: charge percentage and AC state (Windows/Linux only)
//! - **Uptime**: time since boot as duration text

use std::fmt;

use thiserror::Error;

use crate::report::MetricValue;

/// Basic system identity probe
pub mod basic;

/// Battery charge and AC state probe
pub mod battery;

/// Root filesystem usage probe
pub mod disk;

/// Memory statistics probe
pub mod memory;

/// Host address and interface enumeration probe
pub mod network;

/// System uptime probe
pub mod uptime;

/// Wi-Fi association probe
pub mod wifi;

/// Bytes per gigabyte as displayed in the report (1024^3, i.e. gibibytes).
pub const BYTES_PER_GB: f64 = (1024u64 * 1024 * 1024) as f64;

/// Convert a byte count to the gigabyte figure shown in the report.
pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}

/// A single probe's failure, recorded and logged by the collector without
/// affecting any other probe.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// An underlying OS or library query failed.
    #[error("system query failed: {0}")]
    Os(String),

    /// An external command could not be executed or reported failure.
    #[error("command execution failed: {0}")]
    Command(String),

    /// The probe exceeded its allotted time and was abandoned.
    #[error("probe timed out")]
    Timeout,

    /// Anything else, including a panic inside the probe body.
    #[error("unexpected probe failure: {0}")]
    Unexpected(String),
}

/// The outcome of one probe invocation: its contributions or a failure.
pub type ProbeResult = Result<Vec<(String, MetricValue)>, ProbeError>;

/// A boxed probe body, so the collector can run real probes and tests can
/// substitute delayed or failing ones.
pub type ProbeFn = Box<dyn FnOnce() -> ProbeResult + Send + 'static>;

/// The closed set of probe kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    Basic,
    Memory,
    Disk,
    Network,
    Wifi,
    Battery,
    Uptime,
}

impl ProbeKind {
    /// Canonical declaration order; report keys are merged in this order.
    pub const ALL: [ProbeKind; 7] = [
        ProbeKind::Basic,
        ProbeKind::Memory,
        ProbeKind::Disk,
        ProbeKind::Network,
        ProbeKind::Wifi,
        ProbeKind::Battery,
        ProbeKind::Uptime,
    ];

    /// Run this probe to completion on the calling thread.
    pub fn run(self) -> ProbeResult {
        match self {
            ProbeKind::Basic => basic::run(),
            ProbeKind::Memory => memory::run(),
            ProbeKind::Disk => disk::run(),
            ProbeKind::Network => network::run(),
            ProbeKind::Wifi => wifi::run(),
            ProbeKind::Battery => battery::run(),
            ProbeKind::Uptime => uptime::run(),
        }
    }

    /// Box this probe's body for dispatch by the collector.
    pub fn runner(self) -> ProbeFn {
        Box::new(move || self.run())
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProbeKind::Basic => "basic",
            ProbeKind::Memory => "memory",
            ProbeKind::Disk => "disk",
            ProbeKind::Network => "network",
            ProbeKind::Wifi => "wifi",
            ProbeKind::Battery => "battery",
            ProbeKind::Uptime => "uptime",
        };
        write!(f, "{}", name)
    }
}

/// The set of probe kinds selected for one run. Any subset is valid,
/// including the empty set and the full set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeRequest {
    pub basic: bool,
    pub memory: bool,
    pub disk: bool,
    pub network: bool,
    pub wifi: bool,
    pub battery: bool,
    pub uptime: bool,
}

impl ProbeRequest {
    /// A request selecting every probe.
    pub fn all() -> Self {
        Self {
            basic: true,
            memory: true,
            disk: true,
            network: true,
            wifi: true,
            battery: true,
            uptime: true,
        }
    }

    /// The selected probe kinds in canonical order.
    pub fn selected(&self) -> Vec<ProbeKind> {
        ProbeKind::ALL
            .iter()
            .copied()
            .filter(|kind| self.enabled(*kind))
            .collect()
    }

    fn enabled(&self, kind: ProbeKind) -> bool {
        match kind {
            ProbeKind::Basic => self.basic,
            ProbeKind::Memory => self.memory,
            ProbeKind::Disk => self.disk,
            ProbeKind::Network => self.network,
            ProbeKind::Wifi => self.wifi,
            ProbeKind::Battery => self.battery,
            ProbeKind::Uptime => self.uptime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_gb_power_of_two() {
        assert_eq!(bytes_to_gb(1 << 30), 1.0);
        assert_eq!(bytes_to_gb(1 << 29), 0.5);
        assert_eq!(bytes_to_gb(0), 0.0);
    }

    #[test]
    fn test_bytes_to_gb_renders_two_decimals() {
        assert_eq!(format!("{:.2}", bytes_to_gb(1_073_741_824)), "1.00");
    }

    #[test]
    fn test_empty_request_selects_nothing() {
        assert!(ProbeRequest::default().selected().is_empty());
    }

    #[test]
    fn test_full_request_selects_all_in_order() {
        assert_eq!(ProbeRequest::all().selected(), ProbeKind::ALL.to_vec());
    }

    #[test]
    fn test_selection_follows_canonical_order() {
        let request = ProbeRequest {
            uptime: true,
            basic: true,
            wifi: true,
            ..ProbeRequest::default()
        };

        assert_eq!(
            request.selected(),
            vec![ProbeKind::Basic, ProbeKind::Wifi, ProbeKind::Uptime]
        );
    }

    #[test]
    fn test_probe_kind_display() {
        assert_eq!(ProbeKind::Basic.to_string(), "basic");
        assert_eq!(ProbeKind::Wifi.to_string(), "wifi");
        assert_eq!(ProbeKind::Uptime.to_string(), "uptime");
    }

    #[test]
    fn test_probe_error_display() {
        assert_eq!(
            ProbeError::Os("no battery".to_string()).to_string(),
            "system query failed: no battery"
        );
        assert_eq!(ProbeError::Timeout.to_string(), "probe timed out");
    }
}
