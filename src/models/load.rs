//! Load record model.
//!
//! A load ("carga") is one row of the dock board: a load in progress with
//! an assigned time, trip, fleet, PRE-BOX slot and BOX-D door.
//!
//! # Time Representation
//! `time` is kept exactly as entered, either `"HH:MM"` or
//! `"DD/MM/YYYY HH:MM"`. Parsing is deferred to the consumers that need it
//! (see [`crate::detection::ClockTime`]), so malformed values never block
//! construction or deserialization.

use serde::{Deserialize, Serialize};

/// A load record supplied by the owning store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadRecord {
    /// Unique load identifier.
    pub id: String,
    /// Textual timestamp, `"HH:MM"` or `"DD/MM/YYYY HH:MM"`.
    #[serde(default)]
    pub time: String,
    /// Associated trip reference (empty = none).
    #[serde(default)]
    pub trip_ref: String,
    /// Associated fleet/vehicle reference (empty = none).
    #[serde(default)]
    pub fleet_ref: String,
    /// Associated PRE-BOX staging slot (empty = none).
    #[serde(default)]
    pub pre_box_ref: String,
    /// Associated BOX-D dock door (empty = none).
    #[serde(default, rename = "boxDRef")]
    pub box_d_ref: String,
    /// Occupancy status.
    #[serde(default)]
    pub status: LoadStatus,
}

/// Occupancy status shared by loads and PRE-BOX slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoadStatus {
    /// Nothing assigned.
    #[default]
    Free,
    /// Vehicle waiting.
    Occupied,
    /// Loading in progress.
    Loading,
    /// Loading finished.
    Complete,
}

impl LoadStatus {
    /// All statuses, in board order.
    pub const ALL: [LoadStatus; 4] = [
        LoadStatus::Free,
        LoadStatus::Occupied,
        LoadStatus::Loading,
        LoadStatus::Complete,
    ];

    /// Whether the slot or load is taken (anything but `Free`).
    #[inline]
    pub fn is_taken(self) -> bool {
        self != LoadStatus::Free
    }
}

impl LoadRecord {
    /// Creates a free load with the given ID and time.
    pub fn new(id: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            time: time.into(),
            trip_ref: String::new(),
            fleet_ref: String::new(),
            pre_box_ref: String::new(),
            box_d_ref: String::new(),
            status: LoadStatus::Free,
        }
    }

    /// Sets the trip reference.
    pub fn with_trip(mut self, trip_ref: impl Into<String>) -> Self {
        self.trip_ref = trip_ref.into();
        self
    }

    /// Sets the fleet reference.
    pub fn with_fleet(mut self, fleet_ref: impl Into<String>) -> Self {
        self.fleet_ref = fleet_ref.into();
        self
    }

    /// Sets the PRE-BOX slot reference.
    pub fn with_pre_box(mut self, pre_box_ref: impl Into<String>) -> Self {
        self.pre_box_ref = pre_box_ref.into();
        self
    }

    /// Sets the BOX-D door reference.
    pub fn with_box_d(mut self, box_d_ref: impl Into<String>) -> Self {
        self.box_d_ref = box_d_ref.into();
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: LoadStatus) -> Self {
        self.status = status;
        self
    }

    /// Trimmed trip reference, `None` if blank.
    pub fn trip(&self) -> Option<&str> {
        non_blank(&self.trip_ref)
    }

    /// Trimmed PRE-BOX reference, `None` if blank.
    pub fn pre_box(&self) -> Option<&str> {
        non_blank(&self.pre_box_ref)
    }

    /// Trimmed BOX-D reference, `None` if blank.
    pub fn box_d(&self) -> Option<&str> {
        non_blank(&self.box_d_ref)
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
