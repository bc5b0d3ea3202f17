//! Policy construction and evaluation.
//!
//! A [`Policy`] is an ordered list of [`Rule`]s evaluated as a conjunction
//! against [`Claims`](crate::Claims): every rule must pass, in insertion
//! order, and the first failing rule's reason is reported. Within a single
//! rule the listed identifiers combine with OR (`*_any`) or AND (`*_all`):
//!
//! ```
//! use palisade::policy;
//!
//! # fn main() -> Result<(), palisade::PolicyError> {
//! // (admin OR analyst) AND (read:data AND write:data)
//! let policy = policy()
//!     .roles_any(["admin", "analyst"])?
//!     .need_all(["read:data", "write:data"])?
//!     .build();
//! # Ok(())
//! # }
//! ```
//!
//! Policies are built once at route-registration time and are immutable
//! and thread-safe afterwards. A policy with no rules means "authentication
//! required, no further constraints" and allows any claims.

mod builder;
mod engine;
mod rule;

pub use builder::{PolicyBuilder, PolicyError, policy};
pub use engine::{Policy, PolicyResult};
pub use rule::Rule;
