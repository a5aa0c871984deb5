//! Integration tests for the concurrent collection engine.
//!
//! These exercise the collector's contract end to end: failure isolation,
//! parallel execution, bounded waits, and the merged report shape.

use std::thread;
use std::time::{Duration, Instant};

use sysprobe::collector::{collect, run_probes, DEFAULT_PROBE_TIMEOUT};
use sysprobe::probes::{
    bytes_to_gb, ProbeError, ProbeFn, ProbeKind, ProbeRequest, ProbeResult,
};
use sysprobe::report::{MetricValue, REPORT_HEADER};

fn probe(body: impl FnOnce() -> ProbeResult + Send + 'static) -> ProbeFn {
    Box::new(body)
}

/// An empty request yields an empty report and no error.
#[test]
fn test_empty_request_yields_empty_report() {
    let report = collect(&ProbeRequest::default(), DEFAULT_PROBE_TIMEOUT).unwrap();

    assert!(report.is_empty());
    assert_eq!(report.render(), format!("{}\n", REPORT_HEADER));
}

/// One failing probe must not suppress the others' contributions.
#[test]
fn test_failure_isolation() {
    let tasks = vec![
        (
            ProbeKind::Memory,
            probe(|| {
                Ok(vec![(
                    "Total Memory (GB)".to_string(),
                    MetricValue::Number(1.0),
                )])
            }),
        ),
        (
            ProbeKind::Disk,
            probe(|| Err(ProbeError::Os("injected disk failure".to_string()))),
        ),
        (
            ProbeKind::Uptime,
            probe(|| {
                Ok(vec![(
                    "System Uptime".to_string(),
                    MetricValue::Text("1:01:01".to_string()),
                )])
            }),
        ),
    ];

    let report = run_probes(tasks, DEFAULT_PROBE_TIMEOUT).unwrap();

    assert_eq!(report.len(), 2);
    assert!(report.get("Total Memory (GB)").is_some());
    assert!(report.get("System Uptime").is_some());
}

/// Probes run concurrently: total wall time is bounded by the slowest
/// probe, not the sum of all probe durations.
#[test]
fn test_probes_run_in_parallel() {
    let delay = Duration::from_millis(200);
    let tasks: Vec<(ProbeKind, ProbeFn)> = [ProbeKind::Basic, ProbeKind::Memory, ProbeKind::Disk]
        .into_iter()
        .map(|kind| {
            let key = kind.to_string();
            let task: ProbeFn = probe(move || {
                thread::sleep(delay);
                Ok(vec![(key, MetricValue::Number(1.0))])
            });
            (kind, task)
        })
        .collect();

    let start = Instant::now();
    let report = run_probes(tasks, DEFAULT_PROBE_TIMEOUT).unwrap();
    let elapsed = start.elapsed();

    assert_eq!(report.len(), 3);
    // Three 200ms probes executed sequentially would take 600ms.
    assert!(
        elapsed < Duration::from_millis(550),
        "expected parallel execution, took {:?}",
        elapsed
    );
}

/// A probe exceeding the bound is dropped; the others are unaffected, and
/// the collector returns at the bound instead of waiting out the hung body.
#[test]
fn test_probe_timeout_is_isolated() {
    let tasks = vec![
        (
            ProbeKind::Network,
            probe(|| {
                thread::sleep(Duration::from_secs(3));
                Ok(vec![("too late".to_string(), MetricValue::Number(1.0))])
            }),
        ),
        (
            ProbeKind::Uptime,
            probe(|| Ok(vec![("on time".to_string(), MetricValue::Number(1.0))])),
        ),
    ];

    let start = Instant::now();
    let report = run_probes(tasks, Duration::from_millis(300)).unwrap();
    let elapsed = start.elapsed();

    assert_eq!(report.len(), 1);
    assert!(report.get("on time").is_some());
    assert!(report.get("too late").is_none());
    // The hung body is abandoned, not waited for.
    assert!(
        elapsed < Duration::from_secs(2),
        "collector waited out a timed-out probe: {:?}",
        elapsed
    );
}

/// The scenario from the design notes: memory and uptime selected, with
/// known underlying values.
#[test]
fn test_memory_and_uptime_scenario() {
    let tasks = vec![
        (
            ProbeKind::Memory,
            probe(|| {
                Ok(vec![
                    (
                        "Total Memory (GB)".to_string(),
                        MetricValue::Number(bytes_to_gb(1 << 30)),
                    ),
                    (
                        "Available Memory (GB)".to_string(),
                        MetricValue::Number(bytes_to_gb(1 << 29)),
                    ),
                ])
            }),
        ),
        (
            ProbeKind::Uptime,
            probe(|| {
                Ok(vec![(
                    "System Uptime".to_string(),
                    MetricValue::Text("1:01:01".to_string()),
                )])
            }),
        ),
    ];

    let report = run_probes(tasks, DEFAULT_PROBE_TIMEOUT).unwrap();

    assert_eq!(report.len(), 3);
    assert_eq!(
        report.get("Total Memory (GB)"),
        Some(&MetricValue::Number(1.0))
    );
    assert_eq!(
        report.get("Available Memory (GB)"),
        Some(&MetricValue::Number(0.5))
    );
    assert_eq!(
        report.get("System Uptime"),
        Some(&MetricValue::Text("1:01:01".to_string()))
    );

    let text = report.render();
    assert!(text.contains("Total Memory (GB): 1.00\n"));
    assert!(text.contains("Available Memory (GB): 0.50\n"));
    assert!(text.contains("System Uptime: 1:01:01\n"));
}

/// Report keys appear in canonical probe order regardless of completion
/// order.
#[test]
fn test_report_order_is_canonical_not_completion() {
    let tasks = vec![
        (
            ProbeKind::Basic,
            probe(|| {
                // Finishes last but must still come first in the report.
                thread::sleep(Duration::from_millis(150));
                Ok(vec![("first".to_string(), MetricValue::Number(1.0))])
            }),
        ),
        (
            ProbeKind::Uptime,
            probe(|| Ok(vec![("second".to_string(), MetricValue::Number(2.0))])),
        ),
    ];

    let report = run_probes(tasks, DEFAULT_PROBE_TIMEOUT).unwrap();
    let keys: Vec<&str> = report.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["first", "second"]);
}

/// Live smoke test: collecting with every probe selected completes, exits
/// cleanly, and reports keys from the always-available probes.
#[test]
fn test_live_collection_all_probes() {
    let report = collect(&ProbeRequest::all(), DEFAULT_PROBE_TIMEOUT).unwrap();

    assert!(!report.is_empty());
    // The basic probe never fails and always contributes these keys.
    assert!(report.get("System").is_some());
    assert!(report.get("Machine").is_some());
    // The wifi probe always contributes a value, sentinel or real.
    assert!(report.get("Wi-Fi Name").is_some());
}

/// Selecting a single probe contributes exactly that probe's keys.
#[test]
fn test_live_single_probe_selection() {
    let request = ProbeRequest {
        basic: true,
        ..ProbeRequest::default()
    };
    let report = collect(&request, DEFAULT_PROBE_TIMEOUT).unwrap();

    let keys: Vec<&str> = report.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        vec!["System", "Node Name", "Release", "Version", "Machine", "Processor"]
    );
}
