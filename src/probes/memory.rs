//! Memory statistics: total and available physical memory.

use log::debug;
use sysinfo::{MemoryRefreshKind, RefreshKind, System};

use crate::report::MetricValue;

use super::{bytes_to_gb, ProbeError, ProbeResult};

pub fn run() -> ProbeResult {
    let sys = System::new_with_specifics(
        RefreshKind::new().with_memory(MemoryRefreshKind::everything()),
    );

    let total = sys.total_memory();
    if total == 0 {
        return Err(ProbeError::Os("memory statistics unavailable".to_string()));
    }

    let entries = vec![
        (
            "Total Memory (GB)".to_string(),
            MetricValue::Number(bytes_to_gb(total)),
        ),
        (
            "Available Memory (GB)".to_string(),
            MetricValue::Number(bytes_to_gb(sys.available_memory())),
        ),
    ];

    debug!("Memory information gathered successfully");
    Ok(entries)
}
