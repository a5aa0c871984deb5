//! Concurrent probe execution and report merging.
//!
//! Every selected probe runs on its own blocking worker; the collector waits
//! for all of them, then merges their contributions into one report in
//! canonical probe order. A probe failure (error, panic, or timeout) is
//! logged and the run continues — only a failure of the runtime itself
//! aborts the collection.

use std::time::Duration;

use anyhow::{Context, Result};
use futures::future;
use log::{debug, error};
use tokio::runtime::Runtime;
use tokio::task;
use tokio::time::timeout;

use crate::probes::{ProbeError, ProbeFn, ProbeKind, ProbeRequest};
use crate::report::MetricReport;

/// Default bound on any single probe's execution time.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Run every probe selected by `request` concurrently and merge the results.
///
/// Probes write disjoint key sets, so merging is conflict-free; the merge
/// happens single-threaded after all workers finish, in canonical probe
/// order regardless of completion order. An empty request yields an empty
/// report and no error.
pub fn collect(request: &ProbeRequest, probe_timeout: Duration) -> Result<MetricReport> {
    let tasks: Vec<(ProbeKind, ProbeFn)> = request
        .selected()
        .into_iter()
        .map(|kind| (kind, kind.runner()))
        .collect();

    run_probes(tasks, probe_timeout)
}

/// Execute the given probe bodies concurrently and merge their results.
///
/// This is the collection engine behind [`collect`]; it takes boxed probe
/// bodies so tests can substitute delayed or failing ones. Returns an error
/// only when the runtime cannot be created — individual probe failures are
/// logged and the remaining probes' contributions are kept.
pub fn run_probes(
    tasks: Vec<(ProbeKind, ProbeFn)>,
    probe_timeout: Duration,
) -> Result<MetricReport> {
    debug!("Starting to gather system information");

    let runtime = Runtime::new().context("Failed to create Tokio runtime")?;

    let outcomes = runtime.block_on(async {
        let probes = tasks.into_iter().map(|(kind, probe)| async move {
            let result = match timeout(probe_timeout, task::spawn_blocking(probe)).await {
                Ok(Ok(result)) => result,
                Ok(Err(join_err)) => Err(ProbeError::Unexpected(join_err.to_string())),
                Err(_) => Err(ProbeError::Timeout),
            };
            (kind, result)
        });

        future::join_all(probes).await
    });

    // Dropping the runtime would block on abandoned spawn_blocking bodies;
    // shut it down in the background so a hung probe cannot stall the return
    // past its timeout.
    runtime.shutdown_background();

    // join_all preserves submission order, which is canonical probe order.
    let mut report = MetricReport::new();
    for (kind, result) in outcomes {
        match result {
            Ok(entries) => {
                debug!("{} probe completed with {} entries", kind, entries.len());
                report.extend(entries);
            }
            Err(err) => error!("{} probe failed: {}", kind, err),
        }
    }

    debug!("Collection finished with {} report entries", report.len());
    Ok(report)
}
