//! Conflict finding model.
//!
//! A finding reports a double-booking or timing clash across two or more
//! loads. Findings are derived data: they are recomputed from scratch on
//! every detection pass and never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A detected conflict between loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictFinding {
    /// Conflict category.
    pub kind: ConflictKind,
    /// Human-readable description, including the offending values.
    pub description: String,
    /// IDs of the loads involved (two or more).
    pub related_load_ids: Vec<String>,
    /// Severity.
    pub severity: Severity,
}

/// Classification of conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictKind {
    /// The same trip is tracked by more than one load.
    DuplicateTrip,
    /// Two loads are scheduled too close together on the same date.
    TimeOverlap,
    /// The same PRE-BOX slot is assigned to more than one load.
    #[serde(rename = "DUPLICATE_PREBOX")]
    DuplicatePreBox,
    /// The same BOX-D door is assigned to more than one load.
    #[serde(rename = "DUPLICATE_BOXD")]
    DuplicateBoxD,
}

/// Finding severity. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Worth a look.
    Low,
    /// Double-booked slot or door.
    Medium,
    /// Needs fixing before loading.
    High,
}

impl ConflictKind {
    /// Wire name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ConflictKind::DuplicateTrip => "DUPLICATE_TRIP",
            ConflictKind::TimeOverlap => "TIME_OVERLAP",
            ConflictKind::DuplicatePreBox => "DUPLICATE_PREBOX",
            ConflictKind::DuplicateBoxD => "DUPLICATE_BOXD",
        }
    }
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
        })
    }
}

impl ConflictFinding {
    /// Creates a finding.
    pub fn new(
        kind: ConflictKind,
        severity: Severity,
        description: impl Into<String>,
        related_load_ids: Vec<String>,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            related_load_ids,
            severity,
        }
    }

    /// Whether the given load takes part in this finding.
    pub fn involves(&self, load_id: &str) -> bool {
        self.related_load_ids.iter().any(|id| id == load_id)
    }

    /// Whether this finding is rated `High`.
    #[inline]
    pub fn is_high(&self) -> bool {
        self.severity == Severity::High
    }
}
