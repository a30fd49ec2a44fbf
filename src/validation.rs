//! Input validation for dock board data.
//!
//! Checks structural integrity of loads, trips, and PRE-BOX slots before
//! they reach the board. Detects:
//! - Empty IDs
//! - Duplicate IDs
//!
//! Double-bookings between valid records are not validation errors; they
//! are reported by [`crate::detection`].

use std::collections::HashSet;

use crate::models::{LoadRecord, PreBox, Trip};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// An entity has an empty or whitespace-only ID.
    EmptyId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates load records: every ID present and unique.
pub fn validate_loads(loads: &[LoadRecord]) -> ValidationResult {
    check_ids("load", loads.iter().map(|l| l.id.as_str()))
}

/// Validates trips: every ID present and unique.
pub fn validate_trips(trips: &[Trip]) -> ValidationResult {
    check_ids("trip", trips.iter().map(|t| t.id.as_str()))
}

/// Validates PRE-BOX slots: every ID present and unique.
pub fn validate_pre_boxes(slots: &[PreBox]) -> ValidationResult {
    check_ids("PRE-BOX", slots.iter().map(|s| s.id.as_str()))
}

fn check_ids<'a>(entity: &str, ids: impl Iterator<Item = &'a str>) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (position, id) in ids.enumerate() {
        if id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Empty {entity} ID at position {position}"),
            ));
            continue;
        }
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {entity} ID: {id}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Shift;

    #[test]
    fn test_valid_loads() {
        let loads = vec![LoadRecord::new("L1", "10:00"), LoadRecord::new("L2", "10:00")];
        assert!(validate_loads(&loads).is_ok());
        assert!(validate_loads(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_load_id() {
        let loads = vec![LoadRecord::new("L1", "10:00"), LoadRecord::new("L1", "11:00")];
        let errors = validate_loads(&loads).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].message.contains("L1"));
    }

    #[test]
    fn test_empty_load_id() {
        let loads = vec![LoadRecord::new("", "10:00"), LoadRecord::new(" ", "10:05")];
        let errors = validate_loads(&loads).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::EmptyId));
    }

    #[test]
    fn test_trips_and_slots() {
        let trips = vec![Trip::new("V1", Shift::Morning), Trip::new("V1", Shift::Night)];
        let errors = validate_trips(&trips).unwrap_err();
        assert!(errors[0].message.contains("trip"));

        let slots = vec![PreBox::new("P1"), PreBox::new("")];
        let errors = validate_pre_boxes(&slots).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyId);
        assert!(errors[0].message.contains("PRE-BOX"));
    }

    #[test]
    fn test_multiple_errors() {
        let loads = vec![
            LoadRecord::new("", "10:00"),
            LoadRecord::new("L1", "10:00"),
            LoadRecord::new("L1", "10:00"),
        ];
        let errors = validate_loads(&loads).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
