//! Claims model consumed from an external token verifier.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A claim field expected to hold a list of strings.
///
/// Token verifiers don't guarantee the JSON shape of custom claims, so this
/// deserializes leniently: a missing field is `Absent`, a string array is
/// `Values`, and anything else (bare string, number, object) is `Malformed`.
/// `Absent` and `Malformed` fail every rule that inspects the field, the
/// same as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClaimList {
    #[default]
    Absent,
    Values(Vec<String>),
    Malformed(serde_json::Value),
}

impl ClaimList {
    /// Whether the field was missing from the token entirely.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The claim values, if the field held a well-formed string list.
    pub fn as_slice(&self) -> Option<&[String]> {
        match self {
            Self::Values(values) => Some(values),
            Self::Absent | Self::Malformed(_) => None,
        }
    }

    /// Whether the field is well-formed and contains `value` exactly
    /// (case-sensitive, no trimming).
    pub fn contains(&self, value: &str) -> bool {
        self.as_slice()
            .is_some_and(|values| values.iter().any(|v| v == value))
    }
}

impl From<Vec<String>> for ClaimList {
    fn from(values: Vec<String>) -> Self {
        Self::Values(values)
    }
}

/// Claims extracted from a verified identity token.
///
/// Produced by an external verifier after signature/expiry checks. Policy
/// evaluation reads only `roles` and `permissions`; every other claim is
/// carried through in `extra` untouched for the caller's own use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (identity ID).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Roles granted to the subject.
    #[serde(default, skip_serializing_if = "ClaimList::is_absent")]
    pub roles: ClaimList,

    /// Permissions granted to the subject.
    #[serde(default, skip_serializing_if = "ClaimList::is_absent")]
    pub permissions: ClaimList,

    /// All other claims (issuer, audience, custom fields).
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sub(mut self, sub: impl Into<String>) -> Self {
        self.sub = Some(sub.into());
        self
    }

    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = ClaimList::Values(roles);
        self
    }

    pub fn with_permissions(mut self, permissions: Vec<String>) -> Self {
        self.permissions = ClaimList::Values(permissions);
        self
    }

    /// Check if the subject has a specific role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Check if the subject has a specific permission.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}
