//! Claims-based authorization policy engine.
//!
//! This crate decides whether a request may proceed given the claims
//! (roles, permissions) carried by an already-verified identity token.
//! Token verification itself — signature, expiry, issuer/audience — is the
//! job of an external verifier; this crate only consumes the [`Claims`] it
//! produces.
//!
//! The authorization flow:
//! 1. At route-registration time, build a [`Policy`] declaratively with
//!    [`policy()`] and the fluent [`PolicyBuilder`] methods
//! 2. Per request, the caller's middleware obtains verified [`Claims`] from
//!    its token verifier
//! 3. [`Policy::evaluate`] walks the rules in insertion order and returns a
//!    [`PolicyResult`] — allow, or deny with a diagnostic reason
//! 4. The middleware maps the result to its own response (for HTTP,
//!    typically 403 on deny)
//!
//! Rules combine with AND across the policy and with OR (`*_any`) or AND
//! (`*_all`) within a single rule, so "(admin OR analyst) AND (read:data
//! AND write:data)" is `roles_any(["admin", "analyst"])` followed by
//! `need_all(["read:data", "write:data"])`.
//!
//! Evaluation is pure and synchronous: no I/O, no global state, no
//! allocation beyond the deny reason. A built [`Policy`] is immutable and
//! safe to share across threads for the process lifetime.

pub mod claims;
pub mod policy;
#[cfg(test)]
mod tests;

pub use claims::{ClaimList, Claims};
pub use policy::{Policy, PolicyBuilder, PolicyError, PolicyResult, Rule, policy};
