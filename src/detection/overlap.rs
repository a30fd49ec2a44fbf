//! Time-overlap scan.
//!
//! # Algorithm
//! 1. Partition loads by date key (first-seen order).
//! 2. Parse each clock to minutes since midnight; unparseable loads drop out.
//! 3. Stable-sort each partition by minutes.
//! 4. Compare adjacent pairs only. A pair with `0 < diff < window` is
//!    reported; `High` below the high-severity threshold, `Low` otherwise.
//!
//! Identical timestamps (`diff == 0`) are not reported. A chain of loads
//! spaced inside the window yields one finding per adjacent pair.

use std::collections::HashMap;

use super::clock::{split_timestamp, ClockTime};
use crate::config::DetectorConfig;
use crate::models::{ConflictFinding, ConflictKind, LoadRecord, Severity};

/// Reports adjacent same-date loads scheduled too close together.
pub fn time_overlaps(loads: &[LoadRecord], config: &DetectorConfig) -> Vec<ConflictFinding> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Vec<(ClockTime, &LoadRecord)>> = Vec::new();

    for load in loads {
        let (date, clock) = split_timestamp(&load.time);
        let Some(at) = ClockTime::parse(clock) else {
            tracing::trace!(load = %load.id, time = %load.time, "skipping unparseable load time");
            continue;
        };
        let slot = *index.entry(date).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push((at, load));
    }

    let mut findings = Vec::new();
    for mut group in groups {
        // Stable: equal times keep input order.
        group.sort_by_key(|(at, _)| *at);
        for pair in group.windows(2) {
            let (a_at, a) = pair[0];
            let (b_at, b) = pair[1];
            let diff = b_at.minutes() - a_at.minutes();
            if diff == 0 || diff >= config.overlap_window_minutes {
                continue;
            }
            let severity = if diff < config.high_severity_minutes {
                Severity::High
            } else {
                Severity::Low
            };
            findings.push(ConflictFinding::new(
                ConflictKind::TimeOverlap,
                severity,
                format!(
                    "Loads at {} and {} are only {diff} minutes apart",
                    a.time, b.time
                ),
                vec![a.id.clone(), b.id.clone()],
            ));
        }
    }
    findings
}
