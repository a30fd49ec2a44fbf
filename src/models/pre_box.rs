//! PRE-BOX staging slot model.

use serde::{Deserialize, Serialize};

use super::LoadStatus;

/// A staging slot where a vehicle waits before loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreBox {
    /// Unique slot identifier (matched against `LoadRecord::pre_box_ref`).
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Current occupancy.
    #[serde(default)]
    pub status: LoadStatus,
}

impl PreBox {
    /// Creates a free slot.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            status: LoadStatus::Free,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the occupancy status.
    pub fn with_status(mut self, status: LoadStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether the slot can take a vehicle.
    pub fn is_available(&self) -> bool {
        !self.status.is_taken()
    }
}
