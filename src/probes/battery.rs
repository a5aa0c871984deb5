//! Battery charge and AC state.
//!
//! Supported on Windows and Linux; elsewhere the probe reports a fixed
//! "Not applicable" value. A machine without a battery is not a failure
//! either and reports "Not available".

use crate::report::MetricValue;

use super::ProbeResult;

#[cfg(any(target_os = "linux", target_os = "windows"))]
pub fn run() -> ProbeResult {
    use log::debug;

    let entries = match battery_snapshot()? {
        Some((percent, plugged)) => vec![
            (
                "Battery Status".to_string(),
                MetricValue::Text(format!("{}%", percent)),
            ),
            (
                "Battery Plugged In".to_string(),
                MetricValue::Text(if plugged { "Yes" } else { "No" }.to_string()),
            ),
        ],
        None => vec![(
            "Battery Status".to_string(),
            MetricValue::Text("Not available".to_string()),
        )],
    };

    debug!("Battery information gathered successfully");
    Ok(entries)
}

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
pub fn run() -> ProbeResult {
    Ok(vec![(
        "Battery Status".to_string(),
        MetricValue::Text("Not applicable on this OS".to_string()),
    )])
}

/// Charge percentage and AC state, or `None` when no battery is present.
#[cfg(target_os = "linux")]
fn battery_snapshot() -> Result<Option<(u32, bool)>, super::ProbeError> {
    use super::ProbeError;
    use std::fs;

    let Ok(dir) = fs::read_dir("/sys/class/power_supply") else {
        return Ok(None);
    };

    for entry in dir.flatten() {
        if !entry.file_name().to_string_lossy().starts_with("BAT") {
            continue;
        }

        let path = entry.path();
        let capacity = fs::read_to_string(path.join("capacity"))
            .map_err(|e| ProbeError::Os(format!("failed to read battery capacity: {}", e)))?;
        let percent = capacity
            .trim()
            .parse::<u32>()
            .map_err(|e| ProbeError::Os(format!("invalid battery capacity: {}", e)))?;

        let status = fs::read_to_string(path.join("status")).unwrap_or_default();
        let plugged = !status.trim().eq_ignore_ascii_case("discharging");

        return Ok(Some((percent, plugged)));
    }

    Ok(None)
}

#[cfg(target_os = "windows")]
fn battery_snapshot() -> Result<Option<(u32, bool)>, super::ProbeError> {
    use super::ProbeError;
    use winapi::um::winbase::{GetSystemPowerStatus, SYSTEM_POWER_STATUS};

    let mut status: SYSTEM_POWER_STATUS = unsafe { std::mem::zeroed() };
    // Safety: the struct is plain data and the pointer is valid for the call.
    let ok = unsafe { GetSystemPowerStatus(&mut status) };
    if ok == 0 {
        return Err(ProbeError::Os("GetSystemPowerStatus failed".to_string()));
    }

    // BatteryFlag 128 means no system battery; 255 means unknown charge.
    if status.BatteryFlag == 128 || status.BatteryLifePercent == 255 {
        return Ok(None);
    }

    Ok(Some((
        u32::from(status.BatteryLifePercent),
        status.ACLineStatus == 1,
    )))
}
