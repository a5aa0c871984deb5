//! System uptime, rendered as duration text.

use log::debug;
use sysinfo::System;

use crate::report::MetricValue;

use super::{ProbeError, ProbeResult};

pub fn run() -> ProbeResult {
    let seconds = System::uptime();
    if seconds == 0 {
        return Err(ProbeError::Os("boot time unavailable".to_string()));
    }

    debug!("System uptime gathered successfully");
    Ok(vec![(
        "System Uptime".to_string(),
        MetricValue::Text(format_uptime(seconds)),
    )])
}

/// Format seconds since boot as `H:MM:SS`, prefixed with a day count past
/// 24 hours (e.g. `1 day, 1:01:01`).
fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    let secs = seconds % 60;

    let clock = format!("{}:{:02}:{:02}", hours, minutes, secs);
    if days > 0 {
        format!("{} day{}, {}", days, if days == 1 { "" } else { "s" }, clock)
    } else {
        clock
    }
}
