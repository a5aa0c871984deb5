//! # sysprobe
//!
//! A cross-platform, single-shot system information snapshot tool.
//!
//! ## Overview
//!
//! sysprobe runs a fixed set of independent probes, each querying one OS
//! subsystem (identity, memory, disk, network, wireless association, power,
//! uptime), executes the requested subset in parallel, and prints the merged
//! result as a flat report. It is a diagnostic tool, not a daemon: it runs
//! once, gathers what was requested, prints, and exits.
//!
//! ## Features
//!
//! - **Cross-platform support**: Windows, macOS, and Linux
//! - **Parallel collection**: every selected probe runs on its own worker
//! - **Failure isolation**: one probe failing never prevents the others from
//!   completing or aborts the run
//! - **Bounded waits**: each probe is subject to a configurable timeout
//! - **Plain text or JSON output**
//!
//! ## Usage
//!
//! ```no_run
//! use std::time::Duration;
//! use sysprobe::collector;
//! use sysprobe::probes::ProbeRequest;
//!
//! # fn main() -> anyhow::Result<()> {
//! let request = ProbeRequest {
//!     memory: true,
//!     uptime: true,
//!     ..ProbeRequest::default()
//! };
//!
//! let report = collector::collect(&request, Duration::from_secs(10))?;
//! print!("{}", report.render());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`probes`]: The probe registry and the seven probe implementations
//! - [`collector`]: Concurrent probe execution and report merging
//! - [`report`]: The merged metric report and its rendering rules

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Concurrent probe execution, merging, and failure isolation
pub mod collector;

/// Probe registry and the individual probe implementations
pub mod probes;

/// The merged metric report and its text/JSON rendering
pub mod report;
