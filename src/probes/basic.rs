//! Basic system identity: OS, hostname, kernel, version, architecture, CPU.

use log::debug;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

use crate::report::MetricValue;

use super::ProbeResult;

pub fn run() -> ProbeResult {
    let sys = System::new_with_specifics(
        RefreshKind::new().with_cpu(CpuRefreshKind::everything()),
    );

    let processor = sys
        .cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    let entries = vec![
        ("System".to_string(), text(System::name())),
        ("Node Name".to_string(), text(System::host_name())),
        ("Release".to_string(), text(System::kernel_version())),
        ("Version".to_string(), text(System::os_version())),
        (
            "Machine".to_string(),
            MetricValue::Text(std::env::consts::ARCH.to_string()),
        ),
        ("Processor".to_string(), MetricValue::Text(processor)),
    ];

    debug!("Basic information gathered successfully");
    Ok(entries)
}

fn text(value: Option<String>) -> MetricValue {
    MetricValue::Text(value.unwrap_or_else(|| "Unknown".to_string()))
}
