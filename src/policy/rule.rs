//! Rule model: one authorization requirement.

use serde::{Deserialize, Serialize};

/// One authorization requirement over the subject's roles or permissions.
///
/// Rules carry no behavior of their own; evaluation lives on
/// [`Policy`](super::Policy). The identifier list is non-empty, enforced at
/// the [`PolicyBuilder`](super::PolicyBuilder) boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    /// At least one of the listed roles must be held.
    RolesAny { roles: Vec<String> },
    /// Every listed role must be held.
    RolesAll { roles: Vec<String> },
    /// At least one of the listed permissions must be held.
    PermissionsAny { permissions: Vec<String> },
    /// Every listed permission must be held.
    PermissionsAll { permissions: Vec<String> },
}

impl Rule {
    /// Short kind name, used in trace output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RolesAny { .. } => "roles_any",
            Self::RolesAll { .. } => "roles_all",
            Self::PermissionsAny { .. } => "permissions_any",
            Self::PermissionsAll { .. } => "permissions_all",
        }
    }

    /// The identifiers this rule matches against, in the order given.
    pub fn identifiers(&self) -> &[String] {
        match self {
            Self::RolesAny { roles } | Self::RolesAll { roles } => roles,
            Self::PermissionsAny { permissions } | Self::PermissionsAll { permissions } => {
                permissions
            }
        }
    }
}
