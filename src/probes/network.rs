//! Host address resolution and network interface enumeration.
//!
//! The two sub-steps are independent: a hostname resolution failure only
//! omits the `IP Address` key, interface enumeration still contributes. The
//! probe as a whole fails only when it has nothing at all to report.

use std::net::ToSocketAddrs;

use log::{debug, warn};
use sysinfo::Networks;

use crate::report::MetricValue;

use super::{ProbeError, ProbeResult};

pub fn run() -> ProbeResult {
    let mut entries = Vec::new();

    match resolve_host_ip() {
        Ok(ip) => entries.push(("IP Address".to_string(), MetricValue::Text(ip))),
        Err(err) => warn!("Hostname resolution failed: {}", err),
    }

    let interfaces = enumerate_interfaces();
    if entries.is_empty() && interfaces.is_empty() {
        return Err(ProbeError::Os(
            "neither host address nor interfaces available".to_string(),
        ));
    }

    entries.push((
        "Network Interfaces".to_string(),
        MetricValue::Interfaces(interfaces),
    ));

    debug!("Network information gathered successfully");
    Ok(entries)
}

/// Resolve the local hostname to an address, the way `gethostbyname` would.
fn resolve_host_ip() -> Result<String, ProbeError> {
    let host = hostname::get()
        .map_err(|e| ProbeError::Os(format!("failed to get hostname: {}", e)))?
        .to_string_lossy()
        .into_owned();

    let mut addrs = (host.as_str(), 0u16)
        .to_socket_addrs()
        .map_err(|e| ProbeError::Os(format!("failed to resolve {}: {}", host, e)))?;

    addrs
        .next()
        .map(|addr| addr.ip().to_string())
        .ok_or_else(|| ProbeError::Os(format!("no address found for {}", host)))
}

/// All interfaces with their addresses, sorted by name for stable display.
fn enumerate_interfaces() -> Vec<(String, Vec<String>)> {
    let networks = Networks::new_with_refreshed_list();

    let mut interfaces: Vec<(String, Vec<String>)> = networks
        .iter()
        .map(|(name, data)| {
            let addrs = data
                .ip_networks()
                .iter()
                .map(|ip| ip.addr.to_string())
                .collect();
            (name.clone(), addrs)
        })
        .collect();

    interfaces.sort_by(|a, b| a.0.cmp(&b.0));
    interfaces
}
