//! Conflict detection over a snapshot of load records.
//!
//! Four independent scans run in a fixed order and their findings are
//! concatenated without cross-scan de-duplication:
//!
//! 1. duplicate trip (`High`)
//! 2. duplicate PRE-BOX (`Medium`)
//! 3. duplicate BOX-D (`Medium`)
//! 4. time overlap (`High` / `Low`)
//!
//! Detection is a pure function of its input. It never fails: malformed
//! times only drop the affected load from the overlap scan.
//!
//! # Usage
//!
//! ```
//! use u_dock::detection::{detect_conflicts, SeverityFilter};
//! use u_dock::models::LoadRecord;
//!
//! let loads = vec![
//!     LoadRecord::new("a", "10:00").with_trip("V1"),
//!     LoadRecord::new("b", "10:30").with_trip("V1"),
//! ];
//! let findings = detect_conflicts(&loads);
//! assert_eq!(findings.len(), 1);
//! assert_eq!(SeverityFilter::HighOnly.apply(&findings).len(), 1);
//! ```

mod clock;
mod duplicates;
mod overlap;

pub use clock::{split_timestamp, ClockTime};
pub use duplicates::{duplicate_box_ds, duplicate_pre_boxes, duplicate_trips};
pub use overlap::time_overlaps;

use std::collections::HashMap;

use crate::config::DetectorConfig;
use crate::models::{ConflictFinding, ConflictKind, LoadRecord, Severity};

/// Runs all scans with the default thresholds.
pub fn detect_conflicts(loads: &[LoadRecord]) -> Vec<ConflictFinding> {
    ConflictDetector::default().detect(loads)
}

/// Conflict detector with configurable overlap thresholds.
///
/// Holds no state between calls; one detector can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictDetector {
    config: DetectorConfig,
}

impl ConflictDetector {
    /// Creates a detector with the given thresholds.
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Thresholds in use.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Runs all scans over `loads`.
    pub fn detect(&self, loads: &[LoadRecord]) -> Vec<ConflictFinding> {
        let mut findings = duplicate_trips(loads);
        findings.extend(duplicate_pre_boxes(loads));
        findings.extend(duplicate_box_ds(loads));
        findings.extend(time_overlaps(loads, &self.config));

        tracing::debug!(
            loads = loads.len(),
            findings = findings.len(),
            "conflict detection finished"
        );
        findings
    }
}

/// Display filter for findings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeverityFilter {
    /// Only `High` findings.
    HighOnly,
    /// Every finding.
    #[default]
    All,
}

impl SeverityFilter {
    /// Returns the findings that pass the filter, in order.
    pub fn apply<'a>(&self, findings: &'a [ConflictFinding]) -> Vec<&'a ConflictFinding> {
        findings
            .iter()
            .filter(|f| match self {
                SeverityFilter::HighOnly => f.is_high(),
                SeverityFilter::All => true,
            })
            .collect()
    }

    /// Flips between `HighOnly` and `All`.
    pub fn toggled(self) -> Self {
        match self {
            SeverityFilter::HighOnly => SeverityFilter::All,
            SeverityFilter::All => SeverityFilter::HighOnly,
        }
    }
}

/// Finding counts for badge rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictSummary {
    /// Total number of findings.
    pub total: usize,
    /// Findings per severity.
    pub by_severity: HashMap<Severity, usize>,
    /// Findings per kind.
    pub by_kind: HashMap<ConflictKind, usize>,
}

impl ConflictSummary {
    /// Tallies a list of findings.
    pub fn calculate(findings: &[ConflictFinding]) -> Self {
        let mut summary = Self {
            total: findings.len(),
            ..Default::default()
        };
        for f in findings {
            *summary.by_severity.entry(f.severity).or_insert(0) += 1;
            *summary.by_kind.entry(f.kind).or_insert(0) += 1;
        }
        summary
    }

    /// Number of findings with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.by_severity.get(&severity).copied().unwrap_or(0)
    }

    /// Highest severity present, `None` when there are no findings.
    pub fn worst(&self) -> Option<Severity> {
        self.by_severity.keys().copied().max()
    }
}
