//! Policy evaluation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Rule;
use crate::claims::{ClaimList, Claims};

/// Result of evaluating a [`Policy`] against a set of claims.
///
/// A denial is expected, common-path behavior and is returned as data
/// rather than an error; the caller maps it to its own response (for HTTP
/// middleware, typically 403). The reason string names the requirement
/// class and the full list of acceptable identifiers. It is a diagnostic
/// for logs and should not be echoed verbatim to untrusted clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum PolicyResult {
    /// Every rule passed (or the policy has no rules).
    Allow,
    /// A rule failed.
    Deny { reason: String },
}

impl PolicyResult {
    pub fn allow() -> Self {
        Self::Allow
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        Self::Deny {
            reason: reason.into(),
        }
    }

    /// Whether the request may proceed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// The denial reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::Deny { reason } => Some(reason),
        }
    }
}

/// An immutable, ordered set of rules evaluated as a conjunction.
///
/// Built via [`PolicyBuilder`](super::PolicyBuilder) at route-registration
/// time, then shared for the process lifetime: the rule list is
/// `Arc`-backed, so cloning is cheap and concurrent
/// [`evaluate`](Policy::evaluate) calls need no synchronization.
#[derive(Debug, Clone)]
pub struct Policy {
    rules: Arc<[Rule]>,
}

impl Policy {
    pub(super) fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    /// The rules in insertion order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Whether the policy carries no constraints beyond "authenticated".
    pub fn is_unrestricted(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate the policy against verified claims.
    ///
    /// Rules are checked in insertion order and the first failure wins
    /// (remaining rules are not evaluated); an empty policy always allows.
    /// Evaluation is pure and deterministic and never returns an error:
    /// absent, empty, or malformed claim fields simply fail the rule that
    /// inspects them.
    pub fn evaluate(&self, claims: &Claims) -> PolicyResult {
        for rule in self.rules.iter() {
            tracing::trace!(
                kind = rule.kind(),
                identifiers = ?rule.identifiers(),
                "evaluating rule"
            );
            if let Some(reason) = check_rule(rule, claims) {
                tracing::debug!(kind = rule.kind(), %reason, "policy denied");
                return PolicyResult::deny(reason);
            }
        }
        tracing::debug!(rules = self.rules.len(), "policy allowed");
        PolicyResult::Allow
    }
}

/// Check one rule; `None` means pass, `Some(reason)` means fail.
fn check_rule(rule: &Rule, claims: &Claims) -> Option<String> {
    match rule {
        Rule::RolesAny { roles } => check_any(&claims.roles, roles, "roles"),
        Rule::RolesAll { roles } => check_all(&claims.roles, roles, "roles"),
        Rule::PermissionsAny { permissions } => {
            check_any(&claims.permissions, permissions, "permissions")
        }
        Rule::PermissionsAll { permissions } => {
            check_all(&claims.permissions, permissions, "permissions")
        }
    }
}

fn check_any(actual: &ClaimList, required: &[String], noun: &str) -> Option<String> {
    let satisfied = actual
        .as_slice()
        .is_some_and(|held| required.iter().any(|r| held.contains(r)));
    (!satisfied).then(|| {
        format!(
            "Missing required {noun}: at least one of [{}]",
            required.join(", ")
        )
    })
}

fn check_all(actual: &ClaimList, required: &[String], noun: &str) -> Option<String> {
    let satisfied = actual
        .as_slice()
        .is_some_and(|held| required.iter().all(|r| held.contains(r)));
    (!satisfied).then(|| {
        format!(
            "Missing required {noun}: all of [{}]",
            required.join(", ")
        )
    })
}
