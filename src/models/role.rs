//! Operator roles.
//!
//! Access is a plain rank comparison: a role permits an action if it ranks
//! at least as high as the role the action requires.

use serde::{Deserialize, Serialize};

/// Dashboard role. Ordered `Viewer < Operator < Admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Read-only access.
    Viewer,
    /// May create and edit loads, trips and slots.
    Operator,
    /// May delete entities and manage users.
    Admin,
}

impl Role {
    /// Whether this role satisfies `required`.
    #[inline]
    pub fn permits(self, required: Role) -> bool {
        self >= required
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_comparison() {
        assert!(Role::Admin.permits(Role::Operator));
        assert!(Role::Operator.permits(Role::Operator));
        assert!(!Role::Viewer.permits(Role::Operator));
        assert!(Role::Viewer.permits(Role::Viewer));
        assert!(Role::Viewer < Role::Admin);
    }

    #[test]
    fn test_role_wire_name() {
        let role: Role = serde_json::from_str(r#""operator""#).unwrap();
        assert_eq!(role, Role::Operator);
    }
}
