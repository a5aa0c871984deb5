//! Wi-Fi association name.
//!
//! Active probing is Windows-only, via `netsh wlan show interfaces`. Other
//! platforms get a fixed sentinel value. A failed command invocation yields
//! a sentinel string too, never a probe-level failure.

use crate::report::MetricValue;

use super::ProbeResult;

const WIFI_KEY: &str = "Wi-Fi Name";

#[cfg(target_os = "windows")]
pub fn run() -> ProbeResult {
    use log::{debug, error};
    use std::process::Command;

    let output = match Command::new("netsh").args(["wlan", "show", "interfaces"]).output() {
        Ok(output) if output.status.success() => output,
        Ok(output) => {
            error!("netsh exited with status {}", output.status);
            return Ok(error_sentinel());
        }
        Err(err) => {
            error!("Failed to execute netsh: {}", err);
            return Ok(error_sentinel());
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout);
    debug!("Wi-Fi information gathered successfully");
    Ok(vec![(
        WIFI_KEY.to_string(),
        MetricValue::Text(parse_ssid(&stdout)),
    )])
}

#[cfg(not(target_os = "windows"))]
pub fn run() -> ProbeResult {
    Ok(vec![(
        WIFI_KEY.to_string(),
        MetricValue::Text("Not available on non-Windows systems".to_string()),
    )])
}

#[cfg(target_os = "windows")]
fn error_sentinel() -> Vec<(String, MetricValue)> {
    vec![(
        WIFI_KEY.to_string(),
        MetricValue::Text("Error retrieving Wi-Fi name".to_string()),
    )]
}

/// Pull the SSID out of `netsh wlan show interfaces` output.
///
/// Matches the first line whose label is `SSID` (skipping `BSSID`); no such
/// line means no association.
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
fn parse_ssid(output: &str) -> String {
    for line in output.lines() {
        let line = line.trim_start();
        if line.starts_with("SSID") {
            if let Some((_, value)) = line.split_once(':') {
                return value.trim().to_string();
            }
        }
    }
    "Not connected".to_string()
}
