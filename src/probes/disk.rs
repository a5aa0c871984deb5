//! Root filesystem usage: total, used, and free space.

use std::path::Path;

use log::debug;
use sysinfo::Disks;

use crate::report::MetricValue;

use super::{bytes_to_gb, ProbeError, ProbeResult};

pub fn run() -> ProbeResult {
    let disks = Disks::new_with_refreshed_list();
    let root = root_mount_point();

    let disk = disks
        .iter()
        .find(|disk| disk.mount_point() == Path::new(&root))
        .ok_or_else(|| ProbeError::Os(format!("no filesystem mounted at {}", root)))?;

    let total = disk.total_space();
    let free = disk.available_space();
    let used = total.saturating_sub(free);

    let entries = vec![
        (
            "Total Disk Space (GB)".to_string(),
            MetricValue::Number(bytes_to_gb(total)),
        ),
        (
            "Used Disk Space (GB)".to_string(),
            MetricValue::Number(bytes_to_gb(used)),
        ),
        (
            "Free Disk Space (GB)".to_string(),
            MetricValue::Number(bytes_to_gb(free)),
        ),
    ];

    debug!("Disk information gathered successfully");
    Ok(entries)
}

#[cfg(not(windows))]
fn root_mount_point() -> String {
    "/".to_string()
}

#[cfg(windows)]
fn root_mount_point() -> String {
    std::env::var("SystemDrive")
        .map(|drive| format!("{}\\", drive))
        .unwrap_or_else(|_| "C:\\".to_string())
}
