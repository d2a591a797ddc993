//! # gatekeep-validator
//!
//! Declarative validation of field/value mappings with compact rule chains
//! such as `"required|min:18|max:200"`.
//!
//! ## Quick Start
//!
//! ```
//! use gatekeep_validator::prelude::*;
//! use serde_json::json;
//!
//! let data = json!({ "name": "bobby1", "age": 1000 });
//! let data = data.as_object().unwrap();
//!
//! let report = validate(data)
//!     .verify("name", "required|alpha")?
//!     .verify_with("age", "min:18|max:200", [("max", "Whooah! Too old.")])?
//!     .run()?;
//!
//! assert!(!report.success());
//! assert_eq!(
//!     report.message_for("name"),
//!     Some("Value must contain only alphabetic characters!")
//! );
//! assert_eq!(report.message_for("age"), Some("Whooah! Too old."));
//! # Ok::<(), RuleError>(())
//! ```
//!
//! ## Layout
//!
//! - [`chain`] parses rule chains into tokens
//! - [`registry`] resolves identifiers and builds configured predicates
//! - [`validators`] holds the built-in predicates, declared with [`validator!`]
//! - [`engine`] runs chains per field with first-failure-wins semantics
//! - [`report`] is the result handed back to callers
//!
//! Broken rule definitions (unknown identifiers, wrong argument counts, bad
//! `decimal` configuration) are [`RuleError`](foundation::RuleError)s and
//! abort [`run`](engine::Validator::run). Rejected values are recorded in the
//! [`ValidationReport`](report::ValidationReport).

// ValidationError is returned by value from every predicate; boxing it would
// add an allocation per failure.
#![allow(clippy::result_large_err)]

pub mod chain;
pub mod combinators;
pub mod engine;
pub mod foundation;
mod macros;
pub mod messages;
pub mod prelude;
pub mod registry;
pub mod report;
pub mod validators;

pub use engine::{Validator, validate};
pub use report::ValidationReport;
