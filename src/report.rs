//! The merged metric report and its rendering rules.
//!
//! A [`MetricReport`] maps metric names to values in insertion order. The
//! collector owns it during a run and hands it over immutably for display.
//! Rendering rules:
//!
//! - Numeric values whose key contains `GB` render with two-decimal fixed
//!   precision. Other numbers use default float formatting, so a whole
//!   number drops its trailing `.0` (no current probe emits one; revisit
//!   the precision rule before adding a non-GB numeric metric).
//! - Interface maps render as indented sub-lines, one per interface, with
//!   addresses comma-joined.
//! - Everything else renders as-is.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Header line printed above every report.
pub const REPORT_HEADER: &str = "=== System Information ===";

/// A single collected metric value.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    /// A scalar number (e.g. a gigabyte count).
    Number(f64),
    /// Free-form text, including sentinel strings like "Not available".
    Text(String),
    /// Ordered interface name -> list of address strings.
    Interfaces(Vec<(String, Vec<String>)>),
}

/// The merged mapping of all successfully collected metrics for one run.
///
/// Keys are unique and kept in insertion order, which the collector fixes to
/// the canonical probe declaration order at merge time.
#[derive(Debug, Default)]
pub struct MetricReport {
    entries: Vec<(String, MetricValue)>,
}

impl MetricReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one metric to the report.
    pub fn insert(&mut self, key: impl Into<String>, value: MetricValue) {
        self.entries.push((key.into(), value));
    }

    /// Append a probe's whole contribution.
    pub fn extend(&mut self, entries: Vec<(String, MetricValue)>) {
        self.entries.extend(entries);
    }

    /// Look up a metric by key.
    pub fn get(&self, key: &str) -> Option<&MetricValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in report order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, MetricValue)> {
        self.entries.iter()
    }

    /// Render the report as plain text, header included.
    pub fn render(&self) -> String {
        let mut out = String::from(REPORT_HEADER);
        out.push('\n');

        for (key, value) in &self.entries {
            match value {
                MetricValue::Number(n) if key.contains("GB") => {
                    out.push_str(&format!("{}: {:.2}\n", key, n));
                }
                MetricValue::Number(n) => {
                    out.push_str(&format!("{}: {}\n", key, n));
                }
                MetricValue::Text(s) => {
                    out.push_str(&format!("{}: {}\n", key, s));
                }
                MetricValue::Interfaces(interfaces) => {
                    out.push_str(&format!("{}:\n", key));
                    for (name, addrs) in interfaces {
                        out.push_str(&format!("  {}: {}\n", name, addrs.join(", ")));
                    }
                }
            }
        }

        out
    }
}

impl Serialize for MetricValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MetricValue::Number(n) => serializer.serialize_f64(*n),
            MetricValue::Text(s) => serializer.serialize_str(s),
            MetricValue::Interfaces(interfaces) => {
                let mut map = serializer.serialize_map(Some(interfaces.len()))?;
                for (name, addrs) in interfaces {
                    map.serialize_entry(name, addrs)?;
                }
                map.end()
            }
        }
    }
}

impl Serialize for MetricReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
