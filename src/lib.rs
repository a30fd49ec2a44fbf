//! Dock scheduling for logistics yards.
//!
//! Models the dock board of a warehouse yard (loads, trips, PRE-BOX
//! staging slots) and detects double-bookings and timing clashes across
//! the current set of loads.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `LoadRecord`, `ConflictFinding`, `Trip`,
//!   `Shift`, `PreBox`, `Role`
//! - **`detection`**: Conflict detection (duplicate trip / PRE-BOX / BOX-D,
//!   time overlap)
//! - **`store`**: In-memory observable load collection
//! - **`report`**: Shift-based load counts and PRE-BOX occupancy
//! - **`validation`**: Input integrity checks (empty and duplicate IDs)
//! - **`config`**: Detector thresholds, loadable from TOML
//!
//! # Architecture
//!
//! Everything here is synchronous and allocation-only. Persistence, the
//! REST layer and presentation are external collaborators that exchange
//! plain serde records with this crate.

pub mod config;
pub mod detection;
pub mod error;
pub mod models;
pub mod report;
pub mod store;
pub mod validation;

pub use config::DetectorConfig;
pub use detection::{detect_conflicts, ConflictDetector};
pub use error::{ConfigError, StoreError};
