//! Dashboard counters.
//!
//! Shift-bucketed trip and load counts, plus PRE-BOX occupancy.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Trips per shift | Number of trips whose `shift` matches |
//! | Loads per shift | Loads whose trimmed `trip_ref` names a trip in that shift |
//! | Unassigned loads | Loads with a blank or unknown `trip_ref` |
//! | Loads per status | Tally of `LoadRecord::status` |
//! | Occupied ratio | PRE-BOX slots not `Free` / total slots |

use std::collections::HashMap;

use crate::models::{LoadRecord, LoadStatus, PreBox, Shift, Trip};

/// Shift-based load counts.
#[derive(Debug, Clone, Default)]
pub struct ShiftLoadCounts {
    /// Trips per shift.
    pub trips_by_shift: HashMap<Shift, usize>,
    /// Loads per shift, resolved through the load's trip.
    pub loads_by_shift: HashMap<Shift, usize>,
    /// Loads per status.
    pub loads_by_status: HashMap<LoadStatus, usize>,
    /// Loads with no trip, or a trip that is not in the trip list.
    pub unassigned_loads: usize,
}

impl ShiftLoadCounts {
    /// Computes counts from the trip list and the current loads.
    ///
    /// If two trips share an ID, the first one wins.
    pub fn calculate(trips: &[Trip], loads: &[LoadRecord]) -> Self {
        let mut counts = Self::default();
        let mut shift_of: HashMap<&str, &Shift> = HashMap::new();

        for trip in trips {
            *counts.trips_by_shift.entry(trip.shift.clone()).or_insert(0) += 1;
            shift_of.entry(trip.id.trim()).or_insert(&trip.shift);
        }

        for load in loads {
            *counts.loads_by_status.entry(load.status).or_insert(0) += 1;
            match load.trip().and_then(|t| shift_of.get(t)) {
                Some(&shift) => *counts.loads_by_shift.entry(shift.clone()).or_insert(0) += 1,
                None => counts.unassigned_loads += 1,
            }
        }

        counts
    }

    /// Trips in `shift`.
    pub fn trips(&self, shift: &Shift) -> usize {
        self.trips_by_shift.get(shift).copied().unwrap_or(0)
    }

    /// Loads in `shift`.
    pub fn loads(&self, shift: &Shift) -> usize {
        self.loads_by_shift.get(shift).copied().unwrap_or(0)
    }

    /// Loads with `status`.
    pub fn with_status(&self, status: LoadStatus) -> usize {
        self.loads_by_status.get(&status).copied().unwrap_or(0)
    }
}

/// PRE-BOX occupancy counts.
#[derive(Debug, Clone, Default)]
pub struct PreBoxOccupancy {
    /// Total number of slots.
    pub total: usize,
    /// Slots per status.
    pub by_status: HashMap<LoadStatus, usize>,
}

impl PreBoxOccupancy {
    /// Tallies slot statuses.
    pub fn calculate(slots: &[PreBox]) -> Self {
        let mut occupancy = Self {
            total: slots.len(),
            ..Default::default()
        };
        for slot in slots {
            *occupancy.by_status.entry(slot.status).or_insert(0) += 1;
        }
        occupancy
    }

    /// Number of free slots.
    pub fn free(&self) -> usize {
        self.by_status.get(&LoadStatus::Free).copied().unwrap_or(0)
    }

    /// Fraction of slots that are taken (0.0..1.0).
    ///
    /// Returns `None` when there are no slots.
    pub fn occupied_ratio(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some((self.total - self.free()) as f64 / self.total as f64)
    }
}
