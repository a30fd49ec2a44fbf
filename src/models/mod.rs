//! Dock scheduling domain models.
//!
//! Plain data records exchanged with the owning store and the presentation
//! layer. All models serialize with camelCase field names and
//! SCREAMING_SNAKE_CASE enum values.
//!
//! # Domain Mappings
//!
//! | u-dock | Yard floor |
//! |--------|-----------|
//! | LoadRecord | Carga (load in progress) |
//! | PreBox | PRE-BOX staging slot |
//! | Trip | Scheduled movement, bucketed by shift |
//! | ConflictFinding | Double-booking or timing clash |

mod conflict;
mod load;
mod pre_box;
mod role;
mod trip;

pub use conflict::{ConflictFinding, ConflictKind, Severity};
pub use load::{LoadRecord, LoadStatus};
pub use pre_box::PreBox;
pub use role::Role;
pub use trip::{Shift, Trip};
