//! Core validation types and traits
//!
//! This module contains the building blocks the rest of the crate is made of:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`], [`DynValidator`]
//! - **Errors**: [`ValidationError`] for rejected values, [`RuleError`] for
//!   broken rule definitions
//! - **Coercion**: [`coerce`] spells out how JSON values are compared with
//!   textual rule arguments
//!
//! # Examples
//!
//! ```
//! use gatekeep_validator::prelude::*;
//! use serde_json::json;
//!
//! let validator = min("18").present();
//! assert!(validator.validate(&json!(21)).is_ok());
//! assert!(validator.validate(&json!(12)).is_err());
//! assert!(validator.validate(&serde_json::Value::Null).is_ok());
//! # Ok::<(), RuleError>(())
//! ```

pub mod coerce;
pub mod error;
pub mod traits;

pub use error::{RuleError, ValidationError};
pub use traits::{DynValidator, Validate, ValidateExt};
