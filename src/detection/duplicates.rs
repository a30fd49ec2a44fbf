//! Double-booking scans.
//!
//! A trip, a PRE-BOX slot and a BOX-D door must each map to at most one
//! load. Loads are grouped by the trimmed reference value; blank values
//! never form a group.

use std::collections::HashMap;

use crate::models::{ConflictFinding, ConflictKind, LoadRecord, Severity};

/// Reports trips tracked by more than one load (`High`).
pub fn duplicate_trips(loads: &[LoadRecord]) -> Vec<ConflictFinding> {
    scan(loads, LoadRecord::trip, |trip, ids| {
        ConflictFinding::new(
            ConflictKind::DuplicateTrip,
            Severity::High,
            format!("Trip {trip} is assigned to {} loads", ids.len()),
            ids,
        )
    })
}

/// Reports PRE-BOX slots assigned to more than one load (`Medium`).
pub fn duplicate_pre_boxes(loads: &[LoadRecord]) -> Vec<ConflictFinding> {
    scan(loads, LoadRecord::pre_box, |slot, ids| {
        ConflictFinding::new(
            ConflictKind::DuplicatePreBox,
            Severity::Medium,
            format!("PRE-BOX {slot} is assigned to {} loads", ids.len()),
            ids,
        )
    })
}

/// Reports BOX-D doors assigned to more than one load (`Medium`).
pub fn duplicate_box_ds(loads: &[LoadRecord]) -> Vec<ConflictFinding> {
    scan(loads, LoadRecord::box_d, |door, ids| {
        ConflictFinding::new(
            ConflictKind::DuplicateBoxD,
            Severity::Medium,
            format!("BOX-D {door} is assigned to {} loads", ids.len()),
            ids,
        )
    })
}

/// Groups loads by `key` in first-seen order and emits one finding per
/// group with two or more members.
fn scan<'a, K, F>(loads: &'a [LoadRecord], key: K, finding: F) -> Vec<ConflictFinding>
where
    K: Fn(&'a LoadRecord) -> Option<&'a str>,
    F: Fn(&str, Vec<String>) -> ConflictFinding,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();

    for load in loads {
        let Some(value) = key(load) else { continue };
        match index.get(value) {
            Some(&slot) => groups[slot].1.push(load.id.as_str()),
            None => {
                index.insert(value, groups.len());
                groups.push((value, vec![load.id.as_str()]));
            }
        }
    }

    groups
        .into_iter()
        .filter(|(_, members)| members.len() >= 2)
        .map(|(value, members)| {
            finding(value, members.into_iter().map(str::to_string).collect())
        })
        .collect()
}
