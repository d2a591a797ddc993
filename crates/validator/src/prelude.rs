//! Prelude module for convenient imports.
//!
//! A single `use gatekeep_validator::prelude::*;` brings in the engine entry
//! point, the traits, the error types and every built-in validator.
//!
//! # Examples
//!
//! ```
//! use gatekeep_validator::prelude::*;
//! use serde_json::json;
//!
//! let age = min("18").present().with_message("Whooah! Too young.");
//! assert!(age.validate(&json!(30)).is_ok());
//! assert_eq!(age.validate(&json!(3)).unwrap_err().message, "Whooah! Too young.");
//! ```

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{DynValidator, RuleError, Validate, ValidateExt, ValidationError};

// ============================================================================
// VALIDATORS & COMBINATORS
// ============================================================================

pub use crate::combinators::{Present, WithMessage, present, with_message};
pub use crate::validators::*;

// ============================================================================
// ENGINE
// ============================================================================

pub use crate::chain::{RuleChain, RuleToken};
pub use crate::engine::{Validator, VerifyEntry, validate};
pub use crate::report::ValidationReport;
