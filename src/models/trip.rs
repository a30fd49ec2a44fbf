//! Trip and shift models.
//!
//! A trip is a scheduled movement of goods. Trips are bucketed into work
//! shifts ("turnos") for reporting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scheduled trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Unique trip identifier (matched against `LoadRecord::trip_ref`).
    pub id: String,
    /// Work shift the trip belongs to.
    pub shift: Shift,
    /// Fleet/vehicle reference (empty = not yet assigned).
    #[serde(default)]
    pub fleet_ref: String,
    /// Planned departure, same textual format as `LoadRecord::time`.
    #[serde(default)]
    pub departure: String,
}

/// Work shift code.
///
/// Travels on the wire as its flat code string (`"T1"`, `"T4"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Shift {
    /// First shift (T1).
    Morning,
    /// Second shift (T2).
    Afternoon,
    /// Third shift (T3).
    Night,
    /// Site-specific shift code.
    Custom(String),
}

impl Shift {
    /// Parses a shift code, ignoring case and surrounding whitespace.
    /// Unknown codes become `Custom`, stored uppercase.
    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_ascii_uppercase();
        match code.as_str() {
            "T1" | "MORNING" => Shift::Morning,
            "T2" | "AFTERNOON" => Shift::Afternoon,
            "T3" | "NIGHT" => Shift::Night,
            _ => Shift::Custom(code),
        }
    }

    /// Short shift code.
    pub fn code(&self) -> &str {
        match self {
            Shift::Morning => "T1",
            Shift::Afternoon => "T2",
            Shift::Night => "T3",
            Shift::Custom(code) => code,
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<String> for Shift {
    fn from(code: String) -> Self {
        Shift::from_code(&code)
    }
}

impl From<Shift> for String {
    fn from(shift: Shift) -> Self {
        match shift {
            Shift::Custom(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl Trip {
    /// Creates a trip in the given shift.
    pub fn new(id: impl Into<String>, shift: Shift) -> Self {
        Self {
            id: id.into(),
            shift,
            fleet_ref: String::new(),
            departure: String::new(),
        }
    }

    /// Sets the fleet reference.
    pub fn with_fleet(mut self, fleet_ref: impl Into<String>) -> Self {
        self.fleet_ref = fleet_ref.into();
        self
    }

    /// Sets the planned departure.
    pub fn with_departure(mut self, departure: impl Into<String>) -> Self {
        self.departure = departure.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_codes() {
        assert_eq!(Shift::from_code("t1"), Shift::Morning);
        assert_eq!(Shift::from_code(" AFTERNOON "), Shift::Afternoon);
        assert_eq!(Shift::from_code("T3"), Shift::Night);
        assert_eq!(Shift::from_code("T4"), Shift::Custom("T4".into()));
        assert_eq!(Shift::Custom("X".into()).code(), "X");
        assert_eq!(Shift::Night.to_string(), "T3");
    }

    #[test]
    fn test_custom_codes_ignore_case() {
        assert_eq!(Shift::from_code("t4"), Shift::from_code("T4"));
        assert_eq!(Shift::from_code(" x9 ").code(), "X9");
    }

    #[test]
    fn test_shift_wire_format() {
        assert_eq!(serde_json::to_string(&Shift::Morning).unwrap(), r#""T1""#);
        assert_eq!(serde_json::to_string(&Shift::from_code("t4")).unwrap(), r#""T4""#);
        let shift: Shift = serde_json::from_str(r#""night""#).unwrap();
        assert_eq!(shift, Shift::Night);
    }

    #[test]
    fn test_trip_wire_format() {
        let trip: Trip = serde_json::from_str(r#"{"id":"V1","shift":"T1","fleetRef":"F2"}"#).unwrap();
        assert_eq!(trip.shift, Shift::Morning);
        assert_eq!(trip.fleet_ref, "F2");
        assert_eq!(trip.departure, "");

        let custom = Trip::new("V2", Shift::from_code("T4")).with_departure("22:15");
        let json = serde_json::to_value(&custom).unwrap();
        assert_eq!(json["shift"], "T4");
        assert_eq!(json["departure"], "22:15");
        let back: Trip = serde_json::from_value(json).unwrap();
        assert_eq!(back, custom);
    }

    #[test]
    fn test_trip_builder() {
        let trip = Trip::new("V1", Shift::Morning)
            .with_fleet("F1")
            .with_departure("14/10/2026 06:30");
        assert_eq!(trip.id, "V1");
        assert_eq!(trip.shift, Shift::Morning);
        assert_eq!(trip.fleet_ref, "F1");
        assert_eq!(trip.departure, "14/10/2026 06:30");
    }
}
