//! Combinators that wrap a predicate and change how it is applied.
//!
//! - [`Present`] skips absent/`null` values
//! - [`WithMessage`] swaps the failure message for a caller-supplied one

pub mod message;
pub mod present;

pub use message::{WithMessage, with_message};
pub use present::{Present, present};
