//! Fluent construction of policies.

use thiserror::Error;

use super::{Policy, Rule};

/// Errors from misusing the builder.
///
/// These are programmer errors surfaced at route-registration time, before
/// any request is served. They are never produced during evaluation:
/// authorization denials are [`PolicyResult`](super::PolicyResult) values,
/// not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// A role rule was added with an empty identifier list.
    #[error("{method} requires at least one role")]
    NoRoles { method: &'static str },

    /// A permission rule was added with an empty identifier list.
    #[error("{method} requires at least one permission")]
    NoPermissions { method: &'static str },
}

/// Start building a policy.
///
/// Entry point for declarative policy construction at route-registration
/// time; see the [module docs](super) for the combination algebra.
pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

/// Append-only accumulator of rules, frozen into a [`Policy`] by
/// [`build`](PolicyBuilder::build).
///
/// Append methods consume and return the builder so chains read
/// declaratively, and each validates its arguments before appending — an
/// error adds no partial rule. Rules cannot be removed or reordered once
/// added. The builder is single-threaded by design; the policies it
/// produces are not.
#[derive(Debug, Clone, Default)]
pub struct PolicyBuilder {
    rules: Vec<Rule>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least one of the given roles.
    pub fn roles_any<I, S>(mut self, roles: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles = collect(roles);
        if roles.is_empty() {
            return Err(PolicyError::NoRoles {
                method: "roles_any",
            });
        }
        self.rules.push(Rule::RolesAny { roles });
        Ok(self)
    }

    /// Require every one of the given roles.
    pub fn roles_all<I, S>(mut self, roles: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles = collect(roles);
        if roles.is_empty() {
            return Err(PolicyError::NoRoles {
                method: "roles_all",
            });
        }
        self.rules.push(Rule::RolesAll { roles });
        Ok(self)
    }

    /// Require at least one of the given permissions.
    pub fn need_any<I, S>(mut self, permissions: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let permissions = collect(permissions);
        if permissions.is_empty() {
            return Err(PolicyError::NoPermissions { method: "need_any" });
        }
        self.rules.push(Rule::PermissionsAny { permissions });
        Ok(self)
    }

    /// Require every one of the given permissions.
    pub fn need_all<I, S>(mut self, permissions: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let permissions = collect(permissions);
        if permissions.is_empty() {
            return Err(PolicyError::NoPermissions { method: "need_all" });
        }
        self.rules.push(Rule::PermissionsAll { permissions });
        Ok(self)
    }

    /// Freeze the accumulated rules into an immutable [`Policy`].
    ///
    /// Non-destructive: the builder stays usable, and the returned policy
    /// owns its own snapshot of the rules, so later appends never affect
    /// policies built earlier. Calling `build` repeatedly yields
    /// independent policies reflecting the builder's state at each call.
    pub fn build(&self) -> Policy {
        Policy::new(self.rules.clone())
    }
}

fn collect<I, S>(identifiers: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    identifiers.into_iter().map(Into::into).collect()
}
